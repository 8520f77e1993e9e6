//! Fixed color palette and 2×2 grid patterns.

use serde::{Deserialize, Serialize};

/// One of the eight pure palette colors a landmark quadrant can carry.
///
/// The discriminant encodes the channel bit pattern `B*4 + G*2 + R`, so the
/// palette covers every corner of the BGR color cube.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BgrColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl BgrColor {
    /// Channel triple in B,G,R order, components in {0, 255}.
    #[inline]
    pub const fn bgr(self) -> [u8; 3] {
        let bits = self as u8;
        [
            if bits & 4 != 0 { 255 } else { 0 },
            if bits & 2 != 0 { 255 } else { 0 },
            if bits & 1 != 0 { 255 } else { 0 },
        ]
    }

    /// True for black, white, and nothing else in this palette.
    #[inline]
    pub const fn is_grayscale(self) -> bool {
        matches!(self, BgrColor::Black | BgrColor::White)
    }
}

/// Neutral border color used as the default by the print routines.
pub const BORDER_GRAY: [u8; 3] = [128, 128, 128];

/// Quadrant colors of one 2×2 landmark, clockwise from the top-left.
///
/// `c00` is the top-left quadrant, `c01` top-right, `c11` bottom-right and
/// `c10` bottom-left. Usable patterns keep one diagonal black and put two
/// *different* chromatic colors on the other diagonal, so that corner
/// sampling can tell marker identities apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridPattern {
    pub c00: BgrColor,
    pub c01: BgrColor,
    pub c11: BgrColor,
    pub c10: BgrColor,
}

impl GridPattern {
    pub const fn new(c00: BgrColor, c01: BgrColor, c11: BgrColor, c10: BgrColor) -> Self {
        Self { c00, c01, c11, c10 }
    }

    /// Grayscale checkerboard with dark squares on the top-left/bottom-right
    /// diagonal. This is the pattern the positive matching template is
    /// rendered from.
    pub const GRAY_POS: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::White,
        BgrColor::Black,
        BgrColor::White,
    );

    /// Grayscale checkerboard with dark squares on the other diagonal.
    ///
    /// The detector never renders this one; its negative template is the
    /// positive template rotated 90° clockwise. Kept for printing.
    pub const GRAY_NEG: GridPattern = GridPattern::new(
        BgrColor::White,
        BgrColor::Black,
        BgrColor::White,
        BgrColor::Black,
    );

    /// Yellow top-right, magenta bottom-left.
    pub const YELLOW_MAGENTA: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::Yellow,
        BgrColor::Black,
        BgrColor::Magenta,
    );

    /// Yellow top-right, cyan bottom-left.
    pub const YELLOW_CYAN: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::Yellow,
        BgrColor::Black,
        BgrColor::Cyan,
    );

    /// Magenta top-right, yellow bottom-left.
    pub const MAGENTA_YELLOW: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::Magenta,
        BgrColor::Black,
        BgrColor::Yellow,
    );

    /// Magenta top-right, cyan bottom-left.
    pub const MAGENTA_CYAN: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::Magenta,
        BgrColor::Black,
        BgrColor::Cyan,
    );

    /// Cyan top-right, yellow bottom-left.
    pub const CYAN_YELLOW: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::Cyan,
        BgrColor::Black,
        BgrColor::Yellow,
    );

    /// Cyan top-right, magenta bottom-left.
    pub const CYAN_MAGENTA: GridPattern = GridPattern::new(
        BgrColor::Black,
        BgrColor::Cyan,
        BgrColor::Black,
        BgrColor::Magenta,
    );

    /// Quadrant colors clockwise from the top-left: `[c00, c01, c11, c10]`.
    #[inline]
    pub const fn quadrants(&self) -> [BgrColor; 4] {
        [self.c00, self.c01, self.c11, self.c10]
    }

    /// The two chromatic corners of a black-diagonal pattern, in
    /// (top-right, bottom-left) order.
    #[inline]
    pub const fn chroma_pair(&self) -> (BgrColor, BgrColor) {
        (self.c01, self.c10)
    }
}

/// The six color-coded marker identities, in a fixed catalog order.
pub const COLOR_PRESETS: [GridPattern; 6] = [
    GridPattern::YELLOW_MAGENTA,
    GridPattern::YELLOW_CYAN,
    GridPattern::MAGENTA_YELLOW,
    GridPattern::MAGENTA_CYAN,
    GridPattern::CYAN_YELLOW,
    GridPattern::CYAN_MAGENTA,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_triples_are_pure() {
        assert_eq!(BgrColor::Black.bgr(), [0, 0, 0]);
        assert_eq!(BgrColor::Red.bgr(), [0, 0, 255]);
        assert_eq!(BgrColor::Green.bgr(), [0, 255, 0]);
        assert_eq!(BgrColor::Yellow.bgr(), [0, 255, 255]);
        assert_eq!(BgrColor::Blue.bgr(), [255, 0, 0]);
        assert_eq!(BgrColor::Magenta.bgr(), [255, 0, 255]);
        assert_eq!(BgrColor::Cyan.bgr(), [255, 255, 0]);
        assert_eq!(BgrColor::White.bgr(), [255, 255, 255]);
    }

    #[test]
    fn color_presets_have_black_diagonal_and_distinct_chroma() {
        for preset in COLOR_PRESETS {
            assert_eq!(preset.c00, BgrColor::Black);
            assert_eq!(preset.c11, BgrColor::Black);
            let (tr, bl) = preset.chroma_pair();
            assert_ne!(tr, bl);
            assert!(!tr.is_grayscale());
            assert!(!bl.is_grayscale());
        }
    }

    #[test]
    fn gray_patterns_mirror_each_other() {
        let p = GridPattern::GRAY_POS.quadrants();
        let n = GridPattern::GRAY_NEG.quadrants();
        for (a, b) in p.iter().zip(n.iter()) {
            assert_ne!(a, b);
        }
    }
}
