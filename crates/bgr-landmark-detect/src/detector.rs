use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use bgr_landmark_core::{BgrImage, BgrImageView, GrayImageView};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::bilateral::bilateral_smooth;
use crate::color_id::{classify_corners, MarkerColor};
use crate::correlate::{match_prepared, MatchMap, PreparedTemplate};
use crate::error::DetectError;
use crate::nms::find_local_maxima;
use crate::params::DetectorParams;
use crate::recorder::{DetectionRecorder, NullRecorder};
use crate::template::{MarkerOrientation, TemplatePair};

/// One detected landmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkInfo {
    /// Visual center of the marker in source-image pixels.
    pub position: Point2<f32>,
    /// Signed correlation difference at the matched window; the sign
    /// encodes the marker orientation.
    pub diff: f32,
    /// Intensity spread (max − min) inside the matched window.
    pub pixel_range: u8,
    /// Darkest intensity inside the matched window.
    pub pixel_min: u8,
    /// Hue of the first sampled corner (top-right for positive windows,
    /// top-left for negative ones). `None` when color id is disabled.
    pub color0: Option<MarkerColor>,
    /// Hue of the second sampled corner (the diagonally opposite one).
    pub color1: Option<MarkerColor>,
}

impl LandmarkInfo {
    #[inline]
    pub fn orientation(&self) -> MarkerOrientation {
        MarkerOrientation::from_diff(self.diff)
    }
}

/// Correlation map plus accepted landmarks from one detect call.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// `|corr_pos − corr_neg|` over every template placement.
    pub match_map: MatchMap,
    /// Accepted landmarks in maxima discovery order.
    pub landmarks: Vec<LandmarkInfo>,
}

/// Detector for 2×2 BGR color-grid landmarks.
///
/// Construction normalizes the parameters and renders the matched-filter
/// template pair once; afterwards the detector is immutable and `detect`
/// borrows `&self`, so a configured instance can be shared freely across
/// threads. Reconfiguring means building a new detector.
pub struct BgrLandmarkDetector {
    params: DetectorParams,
    tmpl_pos: PreparedTemplate,
    tmpl_neg: PreparedTemplate,
}

impl BgrLandmarkDetector {
    pub fn new(params: DetectorParams) -> Self {
        let params = params.normalized();
        let pair = TemplatePair::for_kdim(params.kdim_usize());
        Self {
            params,
            tmpl_pos: PreparedTemplate::new(&pair.pos),
            tmpl_neg: PreparedTemplate::new(&pair.neg),
        }
    }

    /// The normalized parameters this detector runs with.
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect landmarks in a pixel-registered grayscale/BGR image pair.
    pub fn detect(
        &self,
        gray: &GrayImageView<'_>,
        bgr: &BgrImageView<'_>,
    ) -> Result<Detection, DetectError> {
        self.detect_with(gray, bgr, &mut NullRecorder)
    }

    /// Like [`detect`], reporting intermediate products to `recorder`.
    ///
    /// [`detect`]: BgrLandmarkDetector::detect
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, gray, bgr, recorder),
            fields(width = gray.width, height = gray.height)
        )
    )]
    pub fn detect_with(
        &self,
        gray: &GrayImageView<'_>,
        bgr: &BgrImageView<'_>,
        recorder: &mut dyn DetectionRecorder,
    ) -> Result<Detection, DetectError> {
        self.validate_inputs(gray, bgr)?;
        let k = self.params.kdim_usize();

        let map_pos = match_prepared(gray, &self.tmpl_pos);
        let map_neg = match_prepared(gray, &self.tmpl_neg);

        // flat or generically textured regions score similarly against both
        // orientations and cancel; genuine checkerboard corners survive
        let data: Vec<f32> = map_pos
            .data
            .iter()
            .zip(map_neg.data.iter())
            .map(|(p, n)| (p - n).abs())
            .collect();
        let match_map = MatchMap {
            width: map_pos.width,
            height: map_pos.height,
            data,
        };
        recorder.correlation_map(&match_map);

        let maxima = find_local_maxima(&match_map, self.params.thr_corr);
        log::debug!("{} thresholded maxima", maxima.len());

        let mut landmarks = Vec::new();
        for (x, y) in maxima {
            let diff = map_pos.at(x, y) - map_neg.at(x, y);
            recorder.candidate(x, y, diff);

            let (pix_min, pix_max) = window_min_max(gray, x, y, k);
            let pix_range = pix_max - pix_min;
            // a landmark window holds two dark and two light quadrants:
            // require a wide intensity spread with a sufficiently dark floor
            if pix_range <= self.params.thr_pix_rng || pix_min >= self.params.thr_pix_min {
                continue;
            }

            let half = (k / 2) as f32;
            let mut info = LandmarkInfo {
                position: Point2::new(x as f32 + half, y as f32 + half),
                diff,
                pixel_range: pix_range,
                pixel_min: pix_min,
                color0: None,
                color1: None,
            };

            let roi_bgr = extract_bgr_window(bgr, x, y, k);
            recorder.window(x, y, &roi_bgr);

            if self.params.color_id_enabled {
                let smoothed = bilateral_smooth(&roi_bgr);
                let (c0, c1) = classify_corners(&smoothed.view(), info.orientation());
                match (c0, c1) {
                    (Some(a), Some(b)) if a != b => {
                        info.color0 = c0;
                        info.color1 = c1;
                    }
                    // identical or unclassifiable corner pair: ambiguous
                    _ => continue,
                }
            }

            recorder.landmark(&info);
            landmarks.push(info);
        }

        log::debug!("{} landmarks accepted", landmarks.len());
        Ok(Detection {
            match_map,
            landmarks,
        })
    }

    fn validate_inputs(
        &self,
        gray: &GrayImageView<'_>,
        bgr: &BgrImageView<'_>,
    ) -> Result<(), DetectError> {
        if gray.width != bgr.width || gray.height != bgr.height {
            return Err(DetectError::MismatchedInputs {
                gray_width: gray.width,
                gray_height: gray.height,
                color_width: bgr.width,
                color_height: bgr.height,
            });
        }
        let k = self.params.kdim_usize();
        if gray.width < k || gray.height < k {
            return Err(DetectError::SourceTooSmall {
                width: gray.width,
                height: gray.height,
                kdim: k,
            });
        }
        Ok(())
    }
}

fn window_min_max(gray: &GrayImageView<'_>, x0: usize, y0: usize, k: usize) -> (u8, u8) {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for y in y0..y0 + k {
        for &v in &gray.data[y * gray.width + x0..y * gray.width + x0 + k] {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

fn extract_bgr_window(bgr: &BgrImageView<'_>, x0: usize, y0: usize, k: usize) -> BgrImage {
    let mut data = Vec::with_capacity(k * k * 3);
    for y in y0..y0 + k {
        let i = (y * bgr.width + x0) * 3;
        data.extend_from_slice(&bgr.data[i..i + k * 3]);
    }
    BgrImage {
        width: k,
        height: k,
        data,
    }
}
