use super::histogram::{Histogram, LEVELS};
use crate::error::QuantError;

/// Allowed deviation of the PMF mass from 1.0.
///
/// Summing 256 `f32` fractions accumulates rounding error, so exact
/// equality with 1.0 is not expected.
pub const PMF_TOLERANCE: f32 = 1e-4;

/// Probability mass function over the 256 intensity levels.
///
/// Invariant: every entry is non-negative and the entries sum to 1.0
/// within [`PMF_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
    probs: [f32; LEVELS],
}

impl Pmf {
    /// Normalize a histogram by its total sample count.
    ///
    /// # Errors
    ///
    /// [`QuantError::EmptyImage`] if the histogram counts no samples.
    ///
    /// # Example
    ///
    /// ```
    /// use tone_quant::{Grid, Histogram, Pmf};
    ///
    /// let grid = Grid::filled(1, 5, 10u8);
    /// let pmf = Pmf::from_histogram(&Histogram::from_gray(&grid).unwrap()).unwrap();
    /// assert_eq!(pmf.get(10), 1.0);
    /// ```
    pub fn from_histogram(histogram: &Histogram) -> Result<Self, QuantError> {
        let total = histogram.total();
        if total == 0 {
            return Err(QuantError::EmptyImage);
        }
        let n = total as f64;
        let mut probs = [0.0f32; LEVELS];
        for (p, &c) in probs.iter_mut().zip(histogram.counts().iter()) {
            *p = (c as f64 / n) as f32;
        }
        let pmf = Self { probs };
        debug_assert!(
            (pmf.mass() - 1.0).abs() <= PMF_TOLERANCE,
            "PMF mass {} deviates from 1.0",
            pmf.mass()
        );
        Ok(pmf)
    }

    /// Probability of `level`.
    #[inline]
    pub fn get(&self, level: u8) -> f32 {
        self.probs[level as usize]
    }

    /// All probabilities, indexed by level.
    #[inline]
    pub fn as_array(&self) -> &[f32; LEVELS] {
        &self.probs
    }

    /// Sum of all probabilities.
    pub fn mass(&self) -> f32 {
        self.probs.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_is_one() {
        let mut counts = [0u32; LEVELS];
        for (i, c) in counts.iter_mut().enumerate() {
            *c = (i as u32 * 31 + 7) % 113;
        }
        let pmf = Pmf::from_histogram(&Histogram::from_counts(counts)).unwrap();
        assert!((pmf.mass() - 1.0).abs() <= PMF_TOLERANCE);
        assert!(pmf.as_array().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_single_level() {
        let mut counts = [0u32; LEVELS];
        counts[10] = 5;
        let pmf = Pmf::from_histogram(&Histogram::from_counts(counts)).unwrap();
        assert_eq!(pmf.get(10), 1.0);
        assert_eq!(pmf.get(11), 0.0);
    }

    #[test]
    fn test_uniform_split() {
        let mut counts = [0u32; LEVELS];
        counts[0] = 1;
        counts[255] = 3;
        let pmf = Pmf::from_histogram(&Histogram::from_counts(counts)).unwrap();
        assert_eq!(pmf.get(0), 0.25);
        assert_eq!(pmf.get(255), 0.75);
    }

    #[test]
    fn test_empty_histogram_rejected() {
        let hist = Histogram::from_counts([0; LEVELS]);
        assert_eq!(Pmf::from_histogram(&hist), Err(QuantError::EmptyImage));
    }
}
