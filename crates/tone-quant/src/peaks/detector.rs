//! Sliding-window peak detection over a PMF.
//!
//! A level `k` is a peak when it dominates every level in its window and
//! stands out from the window's mean by more than a prominence threshold.
//! Peaks become the interior levels of a [`BoundarySet`].

use super::boundary::BoundarySet;
use crate::error::QuantError;
use crate::histogram::{Pmf, LEVELS};

/// Default half-window radius.
pub const DEFAULT_HALF_WINDOW: usize = 5;

/// Default prominence threshold (in probability units).
pub const DEFAULT_THRESHOLD: f32 = 0.0003;

/// Largest accepted half-window radius.
pub const MAX_HALF_WINDOW: usize = 127;

/// How the local window mean is normalized.
///
/// The window for candidate `k` is the half-open range `[k - w, k + w)`:
/// `2w` levels, `k` included. Both variants sum exactly those levels and
/// differ only in the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMean {
    /// Divide by `2w`, the number of levels actually summed.
    #[default]
    Exact,
    /// Divide by `2w + 1`, as if the window were closed. Yields a slightly
    /// lower mean, so marginal candidates pass more easily.
    Legacy,
}

impl WindowMean {
    #[inline]
    fn divisor(self, half_window: usize) -> f32 {
        match self {
            WindowMean::Exact => (2 * half_window) as f32,
            WindowMean::Legacy => (2 * half_window + 1) as f32,
        }
    }
}

/// Validated peak-detector configuration.
///
/// # Example
///
/// ```
/// use tone_quant::{Grid, Histogram, PeakDetector, Pmf};
///
/// let grid = Grid::filled(4, 4, 10u8);
/// let pmf = Pmf::from_histogram(&Histogram::from_gray(&grid).unwrap()).unwrap();
///
/// let detector = PeakDetector::new(5, 0.0003).unwrap();
/// let boundaries = detector.detect(&pmf);
/// assert_eq!(boundaries.levels(), &[0, 10, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDetector {
    half_window: usize,
    threshold: f32,
    mean: WindowMean,
}

impl Default for PeakDetector {
    fn default() -> Self {
        Self {
            half_window: DEFAULT_HALF_WINDOW,
            threshold: DEFAULT_THRESHOLD,
            mean: WindowMean::default(),
        }
    }
}

impl PeakDetector {
    /// Create a detector.
    ///
    /// # Errors
    ///
    /// - [`QuantError::InvalidHalfWindow`] unless `1 <= half_window <= 127`
    /// - [`QuantError::InvalidThreshold`] if `threshold` is negative or not finite
    pub fn new(half_window: usize, threshold: f32) -> Result<Self, QuantError> {
        if !(1..=MAX_HALF_WINDOW).contains(&half_window) {
            return Err(QuantError::InvalidHalfWindow(half_window));
        }
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(QuantError::InvalidThreshold(threshold));
        }
        Ok(Self {
            half_window,
            threshold,
            mean: WindowMean::default(),
        })
    }

    /// Select the window-mean normalization.
    #[inline]
    pub fn window_mean(mut self, mean: WindowMean) -> Self {
        self.mean = mean;
        self
    }

    #[inline]
    pub fn half_window(&self) -> usize {
        self.half_window
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn mean(&self) -> WindowMean {
        self.mean
    }

    /// Scan `pmf` and return the boundary set.
    ///
    /// Candidates run over `[w, 255 - w)`, so the sentinels 0 and 255 are
    /// never detected as peaks themselves; they are always added.
    pub fn detect(&self, pmf: &Pmf) -> BoundarySet {
        let probs = pmf.as_array();
        let w = self.half_window;
        let divisor = self.mean.divisor(w);
        let end = (LEVELS - 1).saturating_sub(w);

        let peaks = (w..end).filter(|&k| {
            let window = &probs[k - w..k + w];
            let candidate = probs[k];
            let dominates = window.iter().all(|&p| candidate >= p);
            let mean = window.iter().sum::<f32>() / divisor;
            dominates && candidate > mean + self.threshold
        });

        BoundarySet::from_peaks(peaks.map(|k| k as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;

    fn pmf_from(counts: &[(usize, u32)]) -> Pmf {
        let mut raw = [0u32; LEVELS];
        for &(level, count) in counts {
            raw[level] = count;
        }
        Pmf::from_histogram(&Histogram::from_counts(raw)).unwrap()
    }

    #[test]
    fn test_rejects_bad_half_window() {
        assert_eq!(
            PeakDetector::new(0, 0.0),
            Err(QuantError::InvalidHalfWindow(0))
        );
        assert_eq!(
            PeakDetector::new(128, 0.0),
            Err(QuantError::InvalidHalfWindow(128))
        );
        assert!(PeakDetector::new(127, 0.0).is_ok());
        assert!(PeakDetector::new(1, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert_eq!(
            PeakDetector::new(5, -0.1),
            Err(QuantError::InvalidThreshold(-0.1))
        );
        assert!(PeakDetector::new(5, f32::INFINITY).is_err());
        assert!(PeakDetector::new(5, f32::NAN).is_err());
    }

    #[test]
    fn test_two_separated_peaks() {
        let pmf = pmf_from(&[(40, 30), (41, 10), (39, 10), (180, 40), (181, 10)]);
        let set = PeakDetector::default().detect(&pmf);
        assert_eq!(set.levels(), &[0, 40, 180, 255]);
    }

    #[test]
    fn test_peaks_inside_margin_are_ignored() {
        // w = 5 scans 5..250; levels 2 and 252 are outside the scan range
        let pmf = pmf_from(&[(2, 50), (252, 50)]);
        let set = PeakDetector::default().detect(&pmf);
        assert_eq!(set.levels(), &[0, 255]);
    }

    #[test]
    fn test_flat_pmf_has_no_peaks() {
        let counts: Vec<(usize, u32)> = (0..LEVELS).map(|l| (l, 4)).collect();
        let pmf = pmf_from(&counts);
        let set = PeakDetector::new(3, 0.0).unwrap().detect(&pmf);
        assert_eq!(set.levels(), &[0, 255]);
    }

    #[test]
    fn test_plateau_ties_are_accepted() {
        // two equal neighbours both dominate their windows
        let pmf = pmf_from(&[(100, 20), (101, 20)]);
        let set = PeakDetector::new(2, 0.0).unwrap().detect(&pmf);
        assert_eq!(set.levels(), &[0, 100, 101, 255]);
    }

    #[test]
    fn test_window_excludes_right_edge() {
        // window for k=50, w=2 is [48, 52): level 52 is not compared
        let pmf = pmf_from(&[(50, 10), (52, 20)]);
        let set = PeakDetector::new(2, 0.0).unwrap().detect(&pmf);
        assert_eq!(set.levels(), &[0, 50, 52, 255]);
    }

    #[test]
    fn test_threshold_suppresses_weak_peaks() {
        let pmf = pmf_from(&[(60, 1), (200, 1000)]);
        let lenient = PeakDetector::new(5, 0.0).unwrap().detect(&pmf);
        assert_eq!(lenient.levels(), &[0, 60, 200, 255]);

        let strict = PeakDetector::new(5, 0.01).unwrap().detect(&pmf);
        assert_eq!(strict.levels(), &[0, 200, 255]);
    }

    #[test]
    fn test_legacy_mean_is_more_lenient() {
        // perfectly flat PMF: every window mean equals the candidate under
        // Exact, but Legacy divides 2w values by 2w+1 and lets all pass
        let counts: Vec<(usize, u32)> = (0..LEVELS).map(|l| (l, 1)).collect();
        let pmf = pmf_from(&counts);
        let exact = PeakDetector::new(2, 0.0).unwrap().detect(&pmf);
        let legacy = PeakDetector::new(2, 0.0)
            .unwrap()
            .window_mean(WindowMean::Legacy)
            .detect(&pmf);
        assert!(exact.peaks().is_empty());
        let expected: Vec<u8> = (2..253).collect();
        assert_eq!(legacy.peaks(), expected.as_slice());
    }

    #[test]
    fn test_largest_window_scans_single_level() {
        let pmf = pmf_from(&[(127, 9), (10, 1)]);
        let set = PeakDetector::new(127, 0.0).unwrap().detect(&pmf);
        assert_eq!(set.levels(), &[0, 127, 255]);
    }
}
