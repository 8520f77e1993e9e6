//! Edge-preserving smoothing for small BGR patches.

use bgr_landmark_core::BgrImage;

const SIGMA_COLOR: f64 = 200.0;
const SIGMA_SPACE: f64 = 200.0;

/// Radius-1 bilateral filter over an interleaved BGR patch.
///
/// Color distance is the L1 sum over the three channels and one weight is
/// shared by all channels of a neighbor. With the wide sigmas used here the
/// filter averages away sensor noise inside flat quadrants while the color
/// term keeps the hard quadrant boundaries intact, which is what the corner
/// sampling stage needs. Border pixels use their in-bounds neighbors only.
pub(crate) fn bilateral_smooth(src: &BgrImage) -> BgrImage {
    // exp(−d²/2σc²) for every possible L1 color distance d
    let mut color_w = [0.0f64; 3 * 255 + 1];
    for (d, w) in color_w.iter_mut().enumerate() {
        *w = (-((d * d) as f64) / (2.0 * SIGMA_COLOR * SIGMA_COLOR)).exp();
    }

    let space_w = |dx: i64, dy: i64| {
        (-((dx * dx + dy * dy) as f64) / (2.0 * SIGMA_SPACE * SIGMA_SPACE)).exp()
    };

    let w = src.width as i64;
    let h = src.height as i64;
    let mut out = BgrImage::filled(src.width, src.height, [0, 0, 0]);

    for y in 0..h {
        for x in 0..w {
            let center = src.at(x as usize, y as usize);
            let mut acc = [0.0f64; 3];
            let mut weight_sum = 0.0f64;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }
                    let p = src.at(nx as usize, ny as usize);
                    let d = center
                        .iter()
                        .zip(p.iter())
                        .map(|(&a, &b)| (a as i64 - b as i64).unsigned_abs() as usize)
                        .sum::<usize>();
                    let wt = color_w[d] * space_w(dx, dy);
                    for c in 0..3 {
                        acc[c] += wt * p[c] as f64;
                    }
                    weight_sum += wt;
                }
            }
            let mut px = [0u8; 3];
            for c in 0..3 {
                px[c] = (acc[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
            }
            out.set(x as usize, y as usize, px);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_patch_is_unchanged() {
        let src = BgrImage::filled(7, 7, [40, 90, 200]);
        assert_eq!(bilateral_smooth(&src), src);
    }

    #[test]
    fn solid_corners_survive_smoothing() {
        // two solid quadrant colors meeting along a vertical edge
        let mut src = BgrImage::filled(8, 8, [0, 255, 255]);
        src.fill_rect(0, 0, 4, 8, [0, 0, 0]);
        let out = bilateral_smooth(&src);
        assert_eq!(out.at(0, 0), [0, 0, 0]);
        assert_eq!(out.at(7, 7), [0, 255, 255]);
    }

    #[test]
    fn speckle_is_attenuated() {
        let mut src = BgrImage::filled(5, 5, [100, 100, 100]);
        src.set(2, 2, [130, 130, 130]);
        let out = bilateral_smooth(&src);
        let center = out.at(2, 2);
        assert!(center[0] < 130);
        assert!(center[0] > 100);
    }
}
