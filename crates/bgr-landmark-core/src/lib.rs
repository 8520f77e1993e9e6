//! Core types for BGR landmark detection.
//!
//! This crate is intentionally small and purely data. It holds the fixed
//! color palette, the 2×2 grid patterns a landmark can carry, and the
//! lightweight grayscale/BGR image buffers shared by the detector and the
//! print crates. It does *not* contain any detection logic.

mod image;
mod logger;
mod palette;
mod render;

pub use image::{BgrImage, BgrImageView, GrayImage, GrayImageView, ImageError};
pub use palette::{BgrColor, GridPattern, BORDER_GRAY, COLOR_PRESETS};
pub use render::pattern_tile;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
