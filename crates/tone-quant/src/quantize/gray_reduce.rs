use crate::image::GrayGrid;
use crate::peaks::BoundarySet;

/// Replace every sample with its bucket floor.
///
/// Idempotent: bucket floors are fixed points of the quantizer.
///
/// ```
/// use tone_quant::{gray_reduce, BoundarySet, Grid};
///
/// let grid = Grid::new(1, 4, vec![0u8, 10, 120, 255]).unwrap();
/// let set = BoundarySet::new(vec![0, 5, 100, 255]).unwrap();
/// assert_eq!(gray_reduce(&grid, &set).as_slice(), &[0, 5, 100, 255]);
/// ```
pub fn gray_reduce(image: &GrayGrid, boundaries: &BoundarySet) -> GrayGrid {
    let table = boundaries.lookup_table();
    image.map(|&v| table[v as usize])
}
