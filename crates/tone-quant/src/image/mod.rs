//! Image representation.
//!
//! An [`Image`] is either a single-channel grey grid or a three-channel
//! R, G, B grid. Both variants share [`Dimensions`]; algorithms that only
//! make sense on one variant take the concrete [`Grid`] instead.

mod grid;

pub use grid::{Dimensions, Grid};

/// A single-channel 8-bit grid.
pub type GrayGrid = Grid<u8>;

/// A three-channel 8-bit grid, components in R, G, B order.
pub type RgbGrid = Grid<[u8; 3]>;

/// A decoded still image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    /// One intensity sample per pixel
    SingleChannel(GrayGrid),
    /// Three components per pixel
    ThreeChannel(RgbGrid),
}

impl Image {
    /// Shared dimension metadata.
    pub fn dims(&self) -> Dimensions {
        match self {
            Image::SingleChannel(g) => g.dims(),
            Image::ThreeChannel(g) => g.dims(),
        }
    }

    /// Number of components per pixel (1 or 3).
    pub fn channels(&self) -> usize {
        match self {
            Image::SingleChannel(_) => 1,
            Image::ThreeChannel(_) => 3,
        }
    }

    /// Three-channel view of the image.
    ///
    /// Single-channel samples are replicated into all three components.
    pub fn to_rgb(&self) -> RgbGrid {
        match self {
            Image::SingleChannel(g) => g.map(|&v| [v, v, v]),
            Image::ThreeChannel(g) => g.clone(),
        }
    }
}

impl From<GrayGrid> for Image {
    fn from(grid: GrayGrid) -> Self {
        Image::SingleChannel(grid)
    }
}

impl From<RgbGrid> for Image {
    fn from(grid: RgbGrid) -> Self {
        Image::ThreeChannel(grid)
    }
}
