use serde::{Deserialize, Serialize};

/// Detection thresholds and template size.
///
/// Out-of-range values are clamped at detector construction, never
/// rejected; see [`DetectorParams::normalized`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Template side length in pixels. Forced odd, then clamped to [9, 15].
    pub kdim: i32,
    /// Correlation-difference threshold a local maximum must exceed.
    /// Useful range is (0, 1]; the default works for clean print scans.
    pub thr_corr: f32,
    /// A candidate window's intensity spread (max − min) must exceed this.
    pub thr_pix_rng: u8,
    /// A candidate window's darkest pixel must fall below this.
    pub thr_pix_min: u8,
    /// Classify the two chromatic corners and drop ambiguous candidates.
    pub color_id_enabled: bool,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            kdim: 11,
            thr_corr: 0.5,
            thr_pix_rng: 45,
            thr_pix_min: 80,
            color_id_enabled: true,
        }
    }
}

/// Value railed into `[vmin, vmax]`.
fn rail<T: PartialOrd>(v: T, vmin: T, vmax: T) -> T {
    if v > vmax {
        vmax
    } else if v < vmin {
        vmin
    } else {
        v
    }
}

impl DetectorParams {
    /// Copy with `kdim` forced odd (`(k/2)*2 + 1`, truncating division) and
    /// railed into [9, 15]. The thresholds pass through untouched.
    pub fn normalized(mut self) -> Self {
        let odd = (self.kdim / 2) * 2 + 1;
        self.kdim = rail(odd, 9, 15);
        self
    }

    /// Template side as a usize; only meaningful after [`normalized`].
    ///
    /// [`normalized`]: DetectorParams::normalized
    #[inline]
    pub(crate) fn kdim_usize(&self) -> usize {
        self.kdim as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kdim_is_forced_odd_then_railed() {
        let k = |kdim| DetectorParams {
            kdim,
            ..DetectorParams::default()
        }
        .normalized()
        .kdim;

        assert_eq!(k(8), 9);
        assert_eq!(k(16), 15);
        assert_eq!(k(9), 9);
        assert_eq!(k(-3), 9);
        assert_eq!(k(11), 11);
        assert_eq!(k(13), 13);
        assert_eq!(k(15), 15);
        assert_eq!(k(100), 15);
    }

    #[test]
    fn thresholds_pass_through_unchanged() {
        let p = DetectorParams {
            thr_corr: 7.5,
            thr_pix_rng: 0,
            thr_pix_min: 255,
            ..DetectorParams::default()
        }
        .normalized();
        assert_eq!(p.thr_corr, 7.5);
        assert_eq!(p.thr_pix_rng, 0);
        assert_eq!(p.thr_pix_min, 255);
    }
}
