//! Synthetic input images.

use tone_quant::{GrayGrid, Grid, RgbGrid};

/// Grey levels of the three plateaus in [`trimodal_gray`].
pub const TRIMODAL_LEVELS: [u8; 3] = [50, 120, 200];

/// Boundary set detected for the trimodal fixtures with default settings.
pub const TRIMODAL_BOUNDARIES: [u8; 5] = [0, 50, 120, 200, 255];

/// 6×9 grey image: three vertical bands at 50, 120 and 200.
pub fn trimodal_gray() -> GrayGrid {
    let cols = 9;
    let data = (0..6 * cols)
        .map(|i| TRIMODAL_LEVELS[(i % cols) / 3])
        .collect();
    Grid::new(6, cols, data).unwrap()
}

/// RGB image whose integer-mean greyscale is [`trimodal_gray`].
pub fn trimodal_rgb() -> RgbGrid {
    trimodal_gray().map(|&v| match v {
        50 => [150, 0, 0],
        120 => [0, 120, 240],
        _ => [200, 200, 200],
    })
}

/// Horizontal ramp covering 0..=255 once per row.
pub fn ramp(rows: usize) -> GrayGrid {
    let data = (0..rows).flat_map(|_| 0..=255u8).collect();
    Grid::new(rows, 256, data).unwrap()
}
