//! Rendering of printable landmark targets.

use bgr_landmark_core::{pattern_tile, BgrImage, GridPattern, BORDER_GRAY};
use serde::{Deserialize, Serialize};

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

/// Physical geometry of a single bordered landmark print.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPrintSpec {
    /// Side of the 2×2 grid in inches. Clamped to [0.5, 6.0].
    pub grid_inches: f64,
    /// Border width in inches. Clamped to [0.0, 1.0].
    pub border_inches: f64,
    /// Border fill color in B,G,R order.
    pub border_color: [u8; 3],
    /// Raster resolution in pixels per inch.
    pub dpi: u32,
}

impl Default for LandmarkPrintSpec {
    fn default() -> Self {
        Self {
            grid_inches: 3.0,
            border_inches: 0.25,
            border_color: BORDER_GRAY,
            dpi: 96,
        }
    }
}

/// Geometry of a tiled checkerboard calibration sheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckerboardPrintSpec {
    /// Horizontal tile count. Clamped to [2, 8].
    pub x_repeat: u32,
    /// Vertical tile count. Clamped to [2, 8].
    pub y_repeat: u32,
    /// Side of one 2×2 grid tile in inches. Clamped to [0.5, 2.0]; sheets
    /// use a tighter upper bound than single landmarks so the tiled field
    /// stays printable.
    pub grid_inches: f64,
    /// Border width in inches. Clamped to [0.0, 1.0].
    pub border_inches: f64,
    /// Border fill color in B,G,R order.
    pub border_color: [u8; 3],
    /// Raster resolution in pixels per inch.
    pub dpi: u32,
}

impl Default for CheckerboardPrintSpec {
    fn default() -> Self {
        Self {
            x_repeat: 3,
            y_repeat: 5,
            grid_inches: 0.5,
            border_inches: 0.25,
            border_color: BORDER_GRAY,
            dpi: 96,
        }
    }
}

/// Colored quadrant tile with averaged boundary lines, the visual
/// precursor of the grayscale matching templates.
pub fn render_swatch(pattern: &GridPattern, k: usize) -> BgrImage {
    pattern_tile(pattern, k)
}

/// Render one bordered landmark.
///
/// The 2×2 grid block has solid quadrants split at the pixel midpoint (no
/// averaged boundary lines; those only exist on the small correlation
/// templates) and sits centered inside the border.
pub fn render_landmark(pattern: &GridPattern, spec: &LandmarkPrintSpec) -> BgrImage {
    let grid_in = rail(spec.grid_inches, 0.5, 6.0);
    let border_in = rail(spec.border_inches, 0.0, 1.0);
    let kgrid = (grid_in * spec.dpi as f64) as usize;
    let kborder = (border_in * spec.dpi as f64) as usize;

    let block = render_grid_block(pattern, kgrid);
    let kfull = kgrid + 2 * kborder;
    let mut img = BgrImage::filled(kfull, kfull, spec.border_color);
    img.blit(kborder, kborder, &block);
    img
}

/// Render a checkerboard sheet: the unbordered grid block tiled
/// `x_repeat × y_repeat` times, wrapped in a border.
pub fn render_checkerboard(pattern: &GridPattern, spec: &CheckerboardPrintSpec) -> BgrImage {
    let grid_in = rail(spec.grid_inches, 0.5, 2.0);
    let border_in = rail(spec.border_inches, 0.0, 1.0);
    let xr = rail(spec.x_repeat, 2, 8) as usize;
    let yr = rail(spec.y_repeat, 2, 8) as usize;
    let kgrid = (grid_in * spec.dpi as f64) as usize;
    let kborder = (border_in * spec.dpi as f64) as usize;

    let block = render_grid_block(pattern, kgrid);

    let field_w = kgrid * xr;
    let field_h = kgrid * yr;
    let mut img = BgrImage::filled(field_w + 2 * kborder, field_h + 2 * kborder, spec.border_color);
    for ty in 0..yr {
        for tx in 0..xr {
            img.blit(kborder + tx * kgrid, kborder + ty * kgrid, &block);
        }
    }
    img
}

/// Solid 2×2 quadrant block of side `kgrid`, split at `kgrid/2`.
fn render_grid_block(pattern: &GridPattern, kgrid: usize) -> BgrImage {
    let kh = kgrid / 2;
    let mut block = BgrImage::filled(kgrid, kgrid, pattern.c00.bgr());
    block.fill_rect(kh, 0, kgrid - kh, kh, pattern.c01.bgr());
    block.fill_rect(kh, kh, kgrid - kh, kgrid - kh, pattern.c11.bgr());
    block.fill_rect(0, kh, kh, kgrid - kh, pattern.c10.bgr());
    block
}
