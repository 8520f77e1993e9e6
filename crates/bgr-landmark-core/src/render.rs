//! Rendering of a 2×2 grid pattern into a small BGR tile.
//!
//! The tile is the common precursor of both the grayscale matching templates
//! and the printable color swatches: four solid quadrants, pairwise-averaged
//! colors along the internal boundary lines, and a four-way average at the
//! center pixel.

use crate::image::BgrImage;
use crate::palette::GridPattern;

fn avg2(a: [u8; 3], b: [u8; 3]) -> [u8; 3] {
    let mut out = [0u8; 3];
    for c in 0..3 {
        out[c] = ((a[c] as f32 + b[c] as f32) / 2.0).round() as u8;
    }
    out
}

fn avg4(a: [u8; 3], b: [u8; 3], c: [u8; 3], d: [u8; 3]) -> [u8; 3] {
    let mut out = [0u8; 3];
    for ch in 0..3 {
        out[ch] =
            ((a[ch] as f32 + b[ch] as f32 + c[ch] as f32 + d[ch] as f32) / 4.0).round() as u8;
    }
    out
}

/// Render `pattern` as a `k`×`k` BGR tile.
///
/// Quadrants are `k/2` on a side; the row and column at index `k/2` carry
/// the averaged boundary colors. Deterministic: identical `(pattern, k)`
/// always produces identical pixels.
pub fn pattern_tile(pattern: &GridPattern, k: usize) -> BgrImage {
    use std::cmp::Ordering::*;

    let kh = k / 2;
    let c00 = pattern.c00.bgr();
    let c01 = pattern.c01.bgr();
    let c11 = pattern.c11.bgr();
    let c10 = pattern.c10.bgr();

    let mut img = BgrImage::filled(k, k, [0, 0, 0]);
    for y in 0..k {
        for x in 0..k {
            let bgr = match (x.cmp(&kh), y.cmp(&kh)) {
                (Less, Less) => c00,
                (Greater, Less) => c01,
                (Greater, Greater) => c11,
                (Less, Greater) => c10,
                (Equal, Less) => avg2(c00, c01),
                (Greater, Equal) => avg2(c01, c11),
                (Equal, Greater) => avg2(c11, c10),
                (Less, Equal) => avg2(c10, c00),
                (Equal, Equal) => avg4(c00, c01, c11, c10),
            };
            img.set(x, y, bgr);
        }
    }
    img
}
