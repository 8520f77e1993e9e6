//! End-to-end helpers from `image` crate buffers.

use crate::{core, detector};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    Image(#[from] core::ImageError),

    #[error(transparent)]
    Detect(#[from] detector::DetectError),
}

/// Borrow an `image::GrayImage` as the lightweight core view type.
pub fn gray_view(img: &::image::GrayImage) -> core::GrayImageView<'_> {
    core::GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Convert an `image::RgbImage` into an owned interleaved BGR buffer.
pub fn bgr_from_rgb(img: &::image::RgbImage) -> core::BgrImage {
    let mut data = Vec::with_capacity(img.as_raw().len());
    for px in img.as_raw().chunks_exact(3) {
        data.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    core::BgrImage {
        width: img.width() as usize,
        height: img.height() as usize,
        data,
    }
}

/// Run the landmark detector end-to-end on an RGB image.
///
/// The grayscale channel is derived with the same luma conversion the
/// detector templates are built with, so correlation scores line up with
/// synthetic fixtures.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_landmarks(
    img: &::image::RgbImage,
    params: detector::DetectorParams,
) -> Result<detector::Detection, DetectError> {
    let bgr = bgr_from_rgb(img);
    let gray = bgr.to_gray();
    let det = detector::BgrLandmarkDetector::new(params);
    Ok(det.detect(&gray.view(), &bgr.view())?)
}

/// Run the detector on a raw interleaved BGR buffer.
///
/// The buffer length is validated against the dimensions before any pixel
/// is interpreted.
pub fn detect_landmarks_from_bgr_u8(
    width: usize,
    height: usize,
    pixels: &[u8],
    params: detector::DetectorParams,
) -> Result<detector::Detection, DetectError> {
    let bgr = core::BgrImageView::from_buffer(width, height, pixels)?;
    let owned = core::BgrImage {
        width,
        height,
        data: pixels.to_vec(),
    };
    let gray = owned.to_gray();
    let det = detector::BgrLandmarkDetector::new(params);
    Ok(det.detect(&gray.view(), &bgr)?)
}
