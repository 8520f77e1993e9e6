//! High-level facade crate for the `bgr-landmark-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the core, detector, and print crates
//! - (feature-gated) end-to-end helpers that adapt `image` crate buffers
//!   and run the landmark detector on them.
//!
//! ## Quickstart
//!
//! ```
//! use bgr_landmark::core::{BgrImage, GridPattern};
//! use bgr_landmark::{BgrLandmarkDetector, DetectorParams};
//!
//! let detector = BgrLandmarkDetector::new(DetectorParams::default());
//!
//! let bgr = BgrImage::filled(64, 64, [128, 128, 128]);
//! let gray = bgr.to_gray();
//! let detection = detector.detect(&gray.view(), &bgr.view()).unwrap();
//! println!("landmarks: {}", detection.landmarks.len());
//! ```
//!
//! ## API map
//! - `bgr_landmark::core`: palette, grid patterns, image buffers.
//! - `bgr_landmark::detector`: templates, correlation, the detector itself.
//! - `bgr_landmark::print`: printable swatches, landmarks, checkerboards.
//! - `bgr_landmark::detect` (feature `image`): end-to-end helpers from
//!   `image::RgbImage`/`image::GrayImage` and raw buffers.

pub use bgr_landmark_core as core;
pub use bgr_landmark_detect as detector;
pub use bgr_landmark_print as print;

pub use bgr_landmark_core::{BgrColor, GridPattern};
pub use bgr_landmark_detect::{
    BgrLandmarkDetector, Detection, DetectorParams, LandmarkInfo, MarkerColor, MarkerOrientation,
};

#[cfg(feature = "image")]
pub mod detect;
