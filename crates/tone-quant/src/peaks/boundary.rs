//! Quantization boundary set.
//!
//! A [`BoundarySet`] partitions the intensity range `0..=255` into
//! contiguous buckets. Each bucket is represented by its lower boundary,
//! the "bucket floor" every sample in it quantizes to.

use std::fmt;

use crate::error::{BoundaryDefect, QuantError};
use crate::histogram::LEVELS;

/// Ordered, strictly increasing quantization levels anchored at 0 and 255.
///
/// The set can only be built well-formed, so [`bucket_floor`](Self::bucket_floor)
/// is total: every intensity has exactly one bucket.
///
/// # Example
///
/// ```
/// use tone_quant::BoundarySet;
///
/// let set = BoundarySet::new(vec![0, 5, 255]).unwrap();
/// assert_eq!(set.bucket_floor(10), 5);
/// assert_eq!(set.bucket_floor(4), 0);
/// assert_eq!(set.bucket_floor(255), 255);
///
/// assert!(BoundarySet::new(vec![5, 255]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
    levels: Vec<u8>,
}

impl BoundarySet {
    /// Validate and wrap a list of levels.
    ///
    /// # Errors
    ///
    /// [`QuantError::MalformedBoundarySet`] if the list has fewer than two
    /// entries, does not start at 0, does not end at 255, or is not strictly
    /// increasing.
    pub fn new(levels: Vec<u8>) -> Result<Self, QuantError> {
        if levels.len() < 2 {
            return Err(BoundaryDefect::TooShort.into());
        }
        if levels[0] != 0 {
            return Err(BoundaryDefect::MissingLowSentinel.into());
        }
        if levels[levels.len() - 1] != 255 {
            return Err(BoundaryDefect::MissingHighSentinel.into());
        }
        if let Some(index) = levels.windows(2).position(|w| w[0] >= w[1]) {
            return Err(BoundaryDefect::NotIncreasing { index: index + 1 }.into());
        }
        Ok(Self { levels })
    }

    /// Just the two sentinels: every sample in `1..=254` quantizes to 0.
    pub fn sentinels() -> Self {
        Self {
            levels: vec![0, 255],
        }
    }

    /// Build from peaks already known to lie strictly inside `1..=254` in
    /// increasing order.
    pub(crate) fn from_peaks(peaks: impl IntoIterator<Item = u8>) -> Self {
        let mut levels = vec![0u8];
        levels.extend(peaks);
        levels.push(255);
        debug_assert!(
            levels.windows(2).all(|w| w[0] < w[1]),
            "peaks must be strictly increasing inside 1..=254: {:?}",
            levels
        );
        Self { levels }
    }

    /// All levels, including the 0 and 255 sentinels.
    #[inline]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Levels strictly between the sentinels (the detected peaks).
    #[inline]
    pub fn peaks(&self) -> &[u8] {
        &self.levels[1..self.levels.len() - 1]
    }

    /// Number of buckets the set partitions `0..=255` into.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.levels.len() - 1
    }

    /// Quantize one intensity to its bucket floor.
    ///
    /// 0 and 255 pass through unchanged. Any other `p` maps to the largest
    /// boundary `b` with `b <= p < next boundary`.
    pub fn bucket_floor(&self, p: u8) -> u8 {
        if p == 0 || p == 255 {
            return p;
        }
        // levels[0] == 0 <= p, so at least one boundary qualifies
        let idx = self.levels.partition_point(|&b| b <= p);
        self.levels[idx - 1]
    }

    /// Bucket floor of every level, indexed by level.
    pub fn lookup_table(&self) -> [u8; LEVELS] {
        let mut table = [0u8; LEVELS];
        for (p, out) in table.iter_mut().enumerate() {
            *out = self.bucket_floor(p as u8);
        }
        table
    }
}

impl TryFrom<Vec<u8>> for BoundarySet {
    type Error = QuantError;

    fn try_from(levels: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl fmt::Display for BoundarySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", level)?;
        }
        Ok(())
    }
}
