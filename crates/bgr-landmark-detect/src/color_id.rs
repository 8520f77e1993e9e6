//! Corner-color classification against the three reference hues.

use bgr_landmark_core::BgrImageView;
use serde::{Deserialize, Serialize};

use crate::template::MarkerOrientation;

/// The three chromatic identities a landmark corner can carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MarkerColor {
    Yellow = 0,
    Magenta = 1,
    Cyan = 2,
}

/// Reference unit vectors in B,G,R order. The array order doubles as the
/// tie-break order: equal distances classify as the earlier entry.
const REFERENCE_HUES: [(MarkerColor, [f32; 3]); 3] = [
    (MarkerColor::Yellow, [0.0, 1.0, 1.0]),
    (MarkerColor::Magenta, [1.0, 0.0, 1.0]),
    (MarkerColor::Cyan, [1.0, 1.0, 0.0]),
];

/// A normalized-channel sum above this means at least two channels are
/// substantially lit, ruling out near-gray pixels. The sum of a min-max
/// normalized triple always falls in [1, 2].
const MIN_NORM_SUM: f32 = 1.2;
/// Raw channel range (max − min over B,G,R) below this means the sample is
/// too low-contrast to classify.
const MIN_CHANNEL_RANGE: f32 = 20.0;

struct CornerSample {
    normalized: [f32; 3],
    range: f32,
}

impl CornerSample {
    fn from_bgr(px: [u8; 3]) -> Self {
        let mut min = px[0] as f32;
        let mut max = px[0] as f32;
        for &v in &px[1..] {
            min = min.min(v as f32);
            max = max.max(v as f32);
        }
        let range = max - min;
        let normalized = if range > 0.0 {
            [
                (px[0] as f32 - min) / range,
                (px[1] as f32 - min) / range,
                (px[2] as f32 - min) / range,
            ]
        } else {
            [0.0; 3]
        };
        Self { normalized, range }
    }

    fn is_classifiable(&self) -> bool {
        let sum: f32 = self.normalized.iter().sum();
        sum > MIN_NORM_SUM && self.range > MIN_CHANNEL_RANGE
    }

    fn nearest_hue(&self) -> MarkerColor {
        let mut best = REFERENCE_HUES[0].0;
        let mut best_dist = f32::INFINITY;
        for (color, reference) in REFERENCE_HUES {
            let dist: f32 = self
                .normalized
                .iter()
                .zip(reference.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            if dist < best_dist {
                best_dist = dist;
                best = color;
            }
        }
        best
    }
}

/// Classify the two chromatic corners of a candidate window.
///
/// The marker design keeps one diagonal black, so the colored corners sit
/// on the other diagonal: (top-right, bottom-left) for a positive window
/// and (top-left, bottom-right) for a negative one. Both corners must pass
/// the shared contrast gate or neither is classified; past the gate the two
/// classifications are fully independent.
pub fn classify_corners(
    roi: &BgrImageView<'_>,
    orientation: MarkerOrientation,
) -> (Option<MarkerColor>, Option<MarkerColor>) {
    let kx = roi.width - 1;
    let ky = roi.height - 1;
    let (p0, p1) = match orientation {
        MarkerOrientation::Positive => (roi.at(kx, 0), roi.at(0, ky)),
        MarkerOrientation::Negative => (roi.at(0, 0), roi.at(kx, ky)),
    };

    let s0 = CornerSample::from_bgr(p0);
    let s1 = CornerSample::from_bgr(p1);
    if !s0.is_classifiable() || !s1.is_classifiable() {
        return (None, None);
    }
    (Some(s0.nearest_hue()), Some(s1.nearest_hue()))
}
