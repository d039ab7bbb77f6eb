use crate::error::QuantError;
use crate::image::GrayGrid;

/// Number of intensity levels in an 8-bit sample.
pub const LEVELS: usize = 256;

/// Per-level sample counts of a single-channel image.
///
/// Invariant: the counts sum to the number of samples of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; LEVELS],
}

impl Histogram {
    /// Count every sample of `image`, one row at a time.
    ///
    /// # Errors
    ///
    /// [`QuantError::EmptyImage`] if the image has no samples.
    pub fn from_gray(image: &GrayGrid) -> Result<Self, QuantError> {
        if image.is_empty() {
            return Err(QuantError::EmptyImage);
        }
        let mut counts = [0u32; LEVELS];
        for row in image.rows_iter() {
            accumulate(&mut counts, row);
        }
        Self::checked(counts, image)
    }

    /// Count every sample of `image`, splitting rows across rayon workers.
    ///
    /// Each worker fills a private accumulator; partial counts are merged by
    /// element-wise sum. The result is identical to [`Histogram::from_gray`].
    #[cfg(feature = "parallel")]
    pub fn from_gray_parallel(image: &GrayGrid) -> Result<Self, QuantError> {
        use rayon::prelude::*;

        if image.is_empty() {
            return Err(QuantError::EmptyImage);
        }
        let rows: Vec<&[u8]> = image.rows_iter().collect();
        let counts = rows
            .par_iter()
            .fold(
                || [0u32; LEVELS],
                |mut acc, row| {
                    accumulate(&mut acc, row);
                    acc
                },
            )
            .reduce(|| [0u32; LEVELS], merge);
        Self::checked(counts, image)
    }

    /// Build a histogram from raw counts.
    pub fn from_counts(counts: [u32; LEVELS]) -> Self {
        Self { counts }
    }

    /// Raw counts, indexed by level.
    #[inline]
    pub fn counts(&self) -> &[u32; LEVELS] {
        &self.counts
    }

    /// Number of samples at `level`.
    #[inline]
    pub fn count(&self, level: u8) -> u32 {
        self.counts[level as usize]
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Largest single-level count (0 for an empty histogram).
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    fn checked(counts: [u32; LEVELS], image: &GrayGrid) -> Result<Self, QuantError> {
        let histogram = Self { counts };
        let expected = image.dims().len() as u64;
        let actual = histogram.total();
        if actual != expected {
            return Err(QuantError::PixelCountMismatch { expected, actual });
        }
        Ok(histogram)
    }
}

#[inline]
fn accumulate(counts: &mut [u32; LEVELS], row: &[u8]) {
    for &v in row {
        counts[v as usize] += 1;
    }
}

#[cfg(feature = "parallel")]
fn merge(mut a: [u32; LEVELS], b: [u32; LEVELS]) -> [u32; LEVELS] {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x += y;
    }
    a
}
