//! Detector for 2×2 BGR color-grid fiducial landmarks.
//!
//! A landmark is a small printed 2×2 checkerboard whose diagonal quadrants
//! carry contrasting colors: one diagonal is black, the other carries two
//! different hues out of yellow/magenta/cyan. Detection runs in stages:
//!
//! 1. correlate the grayscale source against a checkerboard template and
//!    its 90°-rotated counterpart, and take the absolute difference of the
//!    two coefficient maps — flat texture cancels, checkerboard corners
//!    survive with a sign that encodes their orientation;
//! 2. keep thresholded 3×3 local maxima of the difference map;
//! 3. gate each candidate window on its intensity spread and darkest pixel;
//! 4. smooth the candidate's color window, sample its two chromatic
//!    corners, and classify each against the reference hues, dropping
//!    candidates whose corner pair is ambiguous.
//!
//! ## Quickstart
//!
//! ```
//! use bgr_landmark_core::{BgrImage, GrayImage};
//! use bgr_landmark_detect::{BgrLandmarkDetector, DetectorParams};
//!
//! let detector = BgrLandmarkDetector::new(DetectorParams::default());
//!
//! let gray = GrayImage::filled(64, 64, 128);
//! let bgr = BgrImage::filled(64, 64, [128, 128, 128]);
//! let detection = detector.detect(&gray.view(), &bgr.view()).unwrap();
//! assert!(detection.landmarks.is_empty());
//! ```

mod bilateral;
mod color_id;
mod correlate;
mod detector;
mod error;
mod nms;
mod params;
mod recorder;
mod template;

pub use color_id::{classify_corners, MarkerColor};
pub use correlate::{match_template, MatchMap};
pub use detector::{BgrLandmarkDetector, Detection, LandmarkInfo};
pub use error::DetectError;
pub use params::DetectorParams;
pub use recorder::{DetectionRecorder, NullRecorder, SampleCollage};
pub use template::{MarkerOrientation, Template, TemplatePair};
