use crate::image::Image;

/// Invert every component of the image.
///
/// Works on both variants; the result has the same variant and shape.
pub fn negate(image: &Image) -> Image {
    match image {
        Image::SingleChannel(g) => Image::SingleChannel(g.map(|&v| 255 - v)),
        Image::ThreeChannel(g) => {
            Image::ThreeChannel(g.map(|&[r, gr, b]| [255 - r, 255 - gr, 255 - b]))
        }
    }
}
