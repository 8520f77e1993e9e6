//! Printable target generation for BGR landmarks.
//!
//! Pure image synthesis, no detection logic: color swatches, single
//! bordered landmarks, and tiled checkerboard calibration sheets, plus PNG
//! encoding for the resulting rasters. The detector crates use these
//! renders as test fixtures; print shops use them as artwork.

mod png_io;
mod targets;

pub use png_io::{write_bgr_png, PrintError};
pub use targets::{
    render_checkerboard, render_landmark, render_swatch, CheckerboardPrintSpec, LandmarkPrintSpec,
};
