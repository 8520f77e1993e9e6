/// Errors returned by the landmark detector.
///
/// Threshold values never produce errors; out-of-range parameters are
/// clamped at construction instead. Only structurally invalid input images
/// are rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectError {
    #[error(
        "gray and color images differ in size \
         (gray {gray_width}x{gray_height}, color {color_width}x{color_height})"
    )]
    MismatchedInputs {
        gray_width: usize,
        gray_height: usize,
        color_width: usize,
        color_height: usize,
    },

    #[error("source image {width}x{height} is smaller than the {kdim}x{kdim} template")]
    SourceTooSmall {
        width: usize,
        height: usize,
        kdim: usize,
    },
}
