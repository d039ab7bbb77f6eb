//! Error types for tone-quant operations.
//!
//! Every fallible operation in the crate reports a [`QuantError`]. Errors are
//! detected at the point of first violation; no operation returns partial
//! output alongside an error.

use std::fmt;

/// What is wrong with a candidate boundary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDefect {
    /// Fewer than two levels; the 0 and 255 sentinels alone need two.
    TooShort,
    /// First level is not 0
    MissingLowSentinel,
    /// Last level is not 255
    MissingHighSentinel,
    /// Level at the given index is not greater than its predecessor
    NotIncreasing {
        /// Index of the offending level
        index: usize,
    },
}

impl fmt::Display for BoundaryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryDefect::TooShort => write!(f, "fewer than two levels"),
            BoundaryDefect::MissingLowSentinel => write!(f, "first level must be 0"),
            BoundaryDefect::MissingHighSentinel => write!(f, "last level must be 255"),
            BoundaryDefect::NotIncreasing { index } => {
                write!(f, "level at index {} is not strictly increasing", index)
            }
        }
    }
}

/// Error type for image analysis, quantization and filter configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantError {
    /// Image has zero rows or zero columns
    EmptyImage,
    /// Grid data length does not match `rows * cols`
    DataLengthMismatch {
        /// `rows * cols`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
    /// Histogram total disagrees with the number of samples in the image
    PixelCountMismatch {
        /// Samples in the image
        expected: u64,
        /// Sum of the histogram counts
        actual: u64,
    },
    /// Boundary set is not a well-formed partition of 0..=255
    MalformedBoundarySet(BoundaryDefect),
    /// Peak detector half-window outside `1..=127`
    InvalidHalfWindow(usize),
    /// Prominence threshold negative or not finite
    InvalidThreshold(f32),
    /// Binary threshold fraction outside `0.0..=1.0` or not finite
    InvalidBinaryThreshold(f32),
    /// Histogram chart requested with zero height
    InvalidChartHeight,
}

impl fmt::Display for QuantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantError::EmptyImage => write!(f, "image has no pixels"),
            QuantError::DataLengthMismatch { expected, actual } => write!(
                f,
                "grid data length mismatch: expected {} samples, got {}",
                expected, actual
            ),
            QuantError::PixelCountMismatch { expected, actual } => write!(
                f,
                "histogram counted {} samples, image has {}",
                actual, expected
            ),
            QuantError::MalformedBoundarySet(defect) => {
                write!(f, "malformed boundary set: {}", defect)
            }
            QuantError::InvalidHalfWindow(w) => {
                write!(f, "half-window {} out of range (expected 1..=127)", w)
            }
            QuantError::InvalidThreshold(t) => {
                write!(f, "prominence threshold {} must be finite and >= 0", t)
            }
            QuantError::InvalidBinaryThreshold(t) => {
                write!(f, "binary threshold {} must be within 0.0..=1.0", t)
            }
            QuantError::InvalidChartHeight => write!(f, "histogram chart height must be > 0"),
        }
    }
}

impl std::error::Error for QuantError {}

impl From<BoundaryDefect> for QuantError {
    fn from(defect: BoundaryDefect) -> Self {
        QuantError::MalformedBoundarySet(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_image() {
        assert_eq!(QuantError::EmptyImage.to_string(), "image has no pixels");
    }

    #[test]
    fn test_display_malformed_boundary() {
        let err: QuantError = BoundaryDefect::NotIncreasing { index: 3 }.into();
        assert_eq!(
            err.to_string(),
            "malformed boundary set: level at index 3 is not strictly increasing"
        );
    }

    #[test]
    fn test_display_half_window() {
        assert_eq!(
            QuantError::InvalidHalfWindow(200).to_string(),
            "half-window 200 out of range (expected 1..=127)"
        );
    }

    #[test]
    fn test_display_pixel_count_mismatch() {
        let err = QuantError::PixelCountMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(err.to_string(), "histogram counted 9 samples, image has 10");
    }
}
