//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;
use tone_quant::{Dimensions, Image};

use tonelab::rendering::decode_image;

/// Assert `path` holds a decodable PNG and return the image.
pub fn assert_png_file(path: &Path) -> Image {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output file {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}",
        path.display()
    );
    decode_image(path).expect("Output should decode")
}

/// Assert an output image has the given shape and channel count.
pub fn assert_shape(image: &Image, rows: usize, cols: usize, channels: usize) {
    assert_eq!(image.dims(), Dimensions::new(rows, cols));
    assert_eq!(image.channels(), channels, "channel count");
}

/// Assert `levels` is a well-formed boundary set.
pub fn assert_boundaries_well_formed(levels: &[u8]) {
    assert!(levels.len() >= 2, "boundary set too short: {levels:?}");
    assert_eq!(levels.first(), Some(&0));
    assert_eq!(levels.last(), Some(&255));
    assert!(
        levels.windows(2).all(|w| w[0] < w[1]),
        "boundary set not strictly increasing: {levels:?}"
    );
}
