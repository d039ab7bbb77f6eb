use crate::image::{GrayGrid, Image};

/// Convert to a single-channel image by averaging the three components.
///
/// The mean is truncated: `(r + g + b) / 3` in integer arithmetic.
/// Single-channel input is returned as a copy.
pub fn greyscale(image: &Image) -> GrayGrid {
    match image {
        Image::SingleChannel(g) => g.clone(),
        Image::ThreeChannel(g) => {
            g.map(|&[r, gr, b]| ((r as u16 + gr as u16 + b as u16) / 3) as u8)
        }
    }
}
