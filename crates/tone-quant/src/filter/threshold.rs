use crate::error::QuantError;
use crate::image::GrayGrid;

/// Reduce a grey image to pure black and white.
///
/// `fraction` is the cut-off as a share of full scale. It is converted to a
/// level by truncation (`0.25` gives `63`); samples below that level become
/// 0, all others 255.
///
/// # Errors
///
/// [`QuantError::InvalidBinaryThreshold`] if `fraction` is not finite or
/// lies outside `0.0..=1.0`.
pub fn binary_threshold(image: &GrayGrid, fraction: f32) -> Result<GrayGrid, QuantError> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(QuantError::InvalidBinaryThreshold(fraction));
    }
    let cutoff = (fraction * 255.0) as u8;
    Ok(image.map(|&v| if v < cutoff { 0 } else { 255 }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Grid;

    #[test]
    fn test_quarter_cutoff_is_63() {
        let grid = Grid::new(1, 4, vec![0u8, 62, 63, 200]).unwrap();
        let out = binary_threshold(&grid, 0.25).unwrap();
        assert_eq!(out.as_slice(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_zero_fraction_is_all_white() {
        let grid = Grid::new(1, 3, vec![0u8, 1, 255]).unwrap();
        let out = binary_threshold(&grid, 0.0).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_full_fraction_keeps_only_255() {
        let grid = Grid::new(1, 3, vec![0u8, 254, 255]).unwrap();
        let out = binary_threshold(&grid, 1.0).unwrap();
        assert_eq!(out.as_slice(), &[0, 0, 255]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let grid = Grid::filled(1, 1, 0u8);
        assert_eq!(
            binary_threshold(&grid, 1.5),
            Err(QuantError::InvalidBinaryThreshold(1.5))
        );
        assert!(binary_threshold(&grid, f32::NAN).is_err());
        assert!(binary_threshold(&grid, -0.1).is_err());
    }
}
