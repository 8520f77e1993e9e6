//! Matched-filter templates and their orientations.

use bgr_landmark_core::{pattern_tile, GridPattern};
use serde::{Deserialize, Serialize};

/// Which diagonal of a matched window carries the dark squares.
///
/// The detector computes `corr_pos − corr_neg` once per candidate and
/// derives the orientation from its sign; downstream stages receive the
/// typed value instead of re-interpreting the sign themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerOrientation {
    /// Dark squares on the top-left/bottom-right diagonal.
    Positive,
    /// Dark squares on the bottom-left/top-right diagonal.
    Negative,
}

impl MarkerOrientation {
    #[inline]
    pub fn from_diff(diff: f32) -> Self {
        if diff > 0.0 {
            MarkerOrientation::Positive
        } else {
            MarkerOrientation::Negative
        }
    }
}

/// Square grayscale correlation template with odd side length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    k: usize,
    data: Vec<u8>,
}

impl Template {
    /// Render `pattern` at side `k` and convert it to intensity.
    ///
    /// `k` must be odd so the averaged center pixel of the tile exists.
    pub fn render(pattern: &GridPattern, k: usize) -> Self {
        debug_assert!(k % 2 == 1, "template side must be odd");
        let gray = pattern_tile(pattern, k).to_gray();
        Self { k, data: gray.data }
    }

    /// Exact 90°-clockwise rotation.
    pub fn rotated_cw(&self) -> Self {
        let k = self.k;
        let mut data = vec![0u8; k * k];
        for y in 0..k {
            for x in 0..k {
                data[y * k + x] = self.data[(k - 1 - x) * k + y];
            }
        }
        Self { k, data }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.k + x]
    }
}

/// The positive template and its rotated negative counterpart.
///
/// The negative member is always derived by rotation, never rendered
/// independently, so the two stay geometrically consistent matched-filter
/// pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplatePair {
    pub pos: Template,
    pub neg: Template,
}

impl TemplatePair {
    /// Build the grayscale checkerboard pair at side `k`.
    pub fn for_kdim(k: usize) -> Self {
        let pos = Template::render(&GridPattern::GRAY_POS, k);
        let neg = pos.rotated_cw();
        Self { pos, neg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let a = Template::render(&GridPattern::GRAY_POS, 11);
        let b = Template::render(&GridPattern::GRAY_POS, 11);
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_maps_corners_clockwise() {
        let t = Template::render(&GridPattern::GRAY_POS, 9);
        let r = t.rotated_cw();
        // top-left goes to top-right
        assert_eq!(r.at(8, 0), t.at(0, 0));
        assert_eq!(r.at(8, 8), t.at(8, 0));
        assert_eq!(r.at(0, 8), t.at(8, 8));
        assert_eq!(r.at(0, 0), t.at(0, 8));
    }

    #[test]
    fn rotated_gray_pos_equals_rendered_gray_neg() {
        for k in [9usize, 11, 13, 15] {
            let pair = TemplatePair::for_kdim(k);
            let neg = Template::render(&GridPattern::GRAY_NEG, k);
            assert_eq!(pair.neg, neg, "k={k}");
        }
    }

    #[test]
    fn template_quadrants_and_center() {
        let t = Template::render(&GridPattern::GRAY_POS, 11);
        assert_eq!(t.at(0, 0), 0);
        assert_eq!(t.at(10, 0), 255);
        assert_eq!(t.at(10, 10), 0);
        assert_eq!(t.at(0, 10), 255);
        // averaged boundary lines and center come out mid-gray
        assert_eq!(t.at(5, 0), 128);
        assert_eq!(t.at(5, 5), 128);
    }
}
