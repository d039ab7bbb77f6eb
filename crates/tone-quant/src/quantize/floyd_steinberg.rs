//! Floyd-Steinberg error diffusion over a boundary set.
//!
//! Samples are visited in raster order (row-major, left to right, top to
//! bottom) and quantized in place on a copy of the input. The decision for
//! each sample uses its value as currently stored, including error already
//! diffused into it, so the pass is inherently sequential.

use super::kernel::{Kernel, FLOYD_STEINBERG};
use crate::image::GrayGrid;
use crate::peaks::BoundarySet;

/// Quantize `image` to `boundaries` with Floyd-Steinberg error diffusion.
///
/// For each sample, `error = stored - bucket_floor(stored)` is spread over
/// the [`FLOYD_STEINBERG`] taps with truncating integer division. Every
/// neighbour update saturates to `0..=255` before it is stored; taps that
/// fall outside the image are skipped.
///
/// ```
/// use tone_quant::{floyd_steinberg, BoundarySet, Grid};
///
/// let grid = Grid::filled(1, 5, 10u8);
/// let set = BoundarySet::new(vec![0, 5, 255]).unwrap();
/// assert_eq!(floyd_steinberg(&grid, &set).as_slice(), &[5; 5]);
/// ```
pub fn floyd_steinberg(image: &GrayGrid, boundaries: &BoundarySet) -> GrayGrid {
    let table = boundaries.lookup_table();
    let mut out = image.clone();

    for row in 0..out.rows() {
        for col in 0..out.cols() {
            let stored = out.get(row, col);
            let quantized = table[stored as usize];
            out.set(row, col, quantized);

            let error = stored as i32 - quantized as i32;
            if error != 0 {
                diffuse(&mut out, row, col, error, &FLOYD_STEINBERG);
            }
        }
    }

    out
}

fn diffuse(grid: &mut GrayGrid, row: usize, col: usize, error: i32, kernel: &Kernel) {
    for &(d_row, d_col, weight) in kernel.entries {
        let (Some(r), Some(c)) = (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
        else {
            continue;
        };
        if r >= grid.rows() || c >= grid.cols() {
            continue;
        }
        let updated = grid.get(r, c) as i32 + error * weight / kernel.divisor;
        grid.set(r, c, saturate(updated));
    }
}

/// Clamp a signed accumulator into the 8-bit sample range.
#[inline]
fn saturate(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
