//! Optional instrumentation hooks for the detection pipeline.
//!
//! Debug-image dumping and sample collection are injected through
//! [`DetectionRecorder`] instead of compile-time switches, so the pipeline
//! behaves identically whether or not anything is listening.

use bgr_landmark_core::BgrImage;

use crate::correlate::MatchMap;
use crate::detector::LandmarkInfo;

/// Observer for intermediate detection products, called in pipeline order.
///
/// All methods default to no-ops; implementors override only what they
/// need.
pub trait DetectionRecorder {
    /// The finished correlation-difference map, once per detect call.
    fn correlation_map(&mut self, _map: &MatchMap) {}

    /// Every thresholded local maximum, before the intensity gate.
    fn candidate(&mut self, _x: usize, _y: usize, _diff: f32) {}

    /// Every window that passed the intensity gate, with its unsmoothed
    /// color content. Color classification may still drop it.
    fn window(&mut self, _x: usize, _y: usize, _roi_bgr: &BgrImage) {}

    /// Every landmark accepted into the output.
    fn landmark(&mut self, _info: &LandmarkInfo) {}
}

/// Recorder that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRecorder;

impl DetectionRecorder for NullRecorder {}

/// Collects intensity-accepted windows into a tiled contact sheet.
///
/// Each cell is `kdim + 4` pixels on a side: a one-pixel white frame
/// surrounds the sample so the sheet can be annotated by hand afterwards.
/// Samples beyond the capacity are dropped silently.
pub struct SampleCollage {
    cell: usize,
    cols: usize,
    rows: usize,
    count: usize,
    sheet: BgrImage,
}

impl SampleCollage {
    /// Sheet with room for `cols × rows` samples of side `kdim`.
    pub fn new(kdim: usize, cols: usize, rows: usize) -> Self {
        let cell = kdim + 4;
        Self {
            cell,
            cols,
            rows,
            count: 0,
            sheet: BgrImage::filled(cell * cols, cell * rows, [0, 0, 0]),
        }
    }

    /// Default 40×25 layout holding one thousand samples.
    pub fn with_default_layout(kdim: usize) -> Self {
        Self::new(kdim, 40, 25)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sheet(&self) -> &BgrImage {
        &self.sheet
    }

    fn frame(&mut self, x0: usize, y0: usize) {
        let side = self.cell - 2;
        let white = [255u8; 3];
        self.sheet.fill_rect(x0, y0, side, 1, white);
        self.sheet.fill_rect(x0, y0 + side - 1, side, 1, white);
        self.sheet.fill_rect(x0, y0, 1, side, white);
        self.sheet.fill_rect(x0 + side - 1, y0, 1, side, white);
    }
}

impl DetectionRecorder for SampleCollage {
    fn window(&mut self, _x: usize, _y: usize, roi_bgr: &BgrImage) {
        if self.count >= self.cols * self.rows || roi_bgr.width != self.cell - 4 {
            return;
        }
        let x0 = (self.count % self.cols) * self.cell;
        let y0 = (self.count / self.cols) * self.cell;
        self.frame(x0 + 1, y0 + 1);
        self.sheet.blit(x0 + 2, y0 + 2, roi_bgr);
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collage_frames_and_places_samples() {
        let mut collage = SampleCollage::new(9, 4, 2);
        let roi = BgrImage::filled(9, 9, [10, 20, 30]);
        collage.window(0, 0, &roi);
        collage.window(0, 0, &roi);
        assert_eq!(collage.count(), 2);

        let sheet = collage.sheet();
        // first cell: frame at inset 1, sample at inset 2
        assert_eq!(sheet.at(1, 1), [255, 255, 255]);
        assert_eq!(sheet.at(2, 2), [10, 20, 30]);
        // second cell starts one cell stride to the right
        assert_eq!(sheet.at(13 + 2, 2), [10, 20, 30]);
    }

    #[test]
    fn collage_drops_samples_beyond_capacity() {
        let mut collage = SampleCollage::new(9, 2, 1);
        let roi = BgrImage::filled(9, 9, [1, 1, 1]);
        for _ in 0..5 {
            collage.window(0, 0, &roi);
        }
        assert_eq!(collage.count(), 2);
    }

    #[test]
    fn collage_ignores_mismatched_window_size() {
        let mut collage = SampleCollage::new(9, 2, 1);
        let roi = BgrImage::filled(11, 11, [1, 1, 1]);
        collage.window(0, 0, &roi);
        assert_eq!(collage.count(), 0);
    }
}
