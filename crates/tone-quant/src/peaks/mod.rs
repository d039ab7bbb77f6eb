//! Histogram peak detection and the quantization boundaries it produces.

mod boundary;
mod detector;

pub use boundary::BoundarySet;
pub use detector::{
    PeakDetector, WindowMean, DEFAULT_HALF_WINDOW, DEFAULT_THRESHOLD, MAX_HALF_WINDOW,
};
