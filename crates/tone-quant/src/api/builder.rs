//! ToneAnalyzer builder -- histogram, PMF and peak detection in one call.

use crate::error::QuantError;
use crate::histogram::{Histogram, Pmf};
use crate::image::GrayGrid;
use crate::peaks::{BoundarySet, PeakDetector, WindowMean};
use crate::quantize::{floyd_steinberg, gray_reduce};

/// Builder that runs the analysis half of the pipeline on a grey image.
///
/// - Defaults: half-window 5, threshold 0.0003, exact window mean
/// - Configuration methods consume and return `self`
/// - [`analyze()`](Self::analyze) takes `&self`, so one analyzer serves
///   many images
///
/// # Example
///
/// ```
/// use tone_quant::{Grid, ToneAnalyzer};
///
/// let grid = Grid::new(1, 4, vec![10u8, 10, 200, 200]).unwrap();
/// let analysis = ToneAnalyzer::new().analyze(&grid).unwrap();
///
/// assert_eq!(analysis.boundaries().levels(), &[0, 10, 200, 255]);
/// assert_eq!(analysis.gray_reduce(&grid).as_slice(), &[10, 10, 200, 200]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToneAnalyzer {
    detector: PeakDetector,
    parallel: bool,
}

impl ToneAnalyzer {
    /// Analyzer with the default detector, sequential histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicitly configured detector.
    #[inline]
    pub fn detector(mut self, detector: PeakDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Set half-window and threshold, validating both.
    pub fn peaks(mut self, half_window: usize, threshold: f32) -> Result<Self, QuantError> {
        let mean = self.detector.mean();
        self.detector = PeakDetector::new(half_window, threshold)?.window_mean(mean);
        Ok(self)
    }

    /// Select the window-mean normalization.
    #[inline]
    pub fn window_mean(mut self, mean: WindowMean) -> Self {
        self.detector = self.detector.window_mean(mean);
        self
    }

    /// Split histogram accumulation across worker threads.
    ///
    /// Has no effect when the crate is built without the `parallel` feature.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Histogram, PMF and boundary set of `image`.
    ///
    /// # Errors
    ///
    /// [`QuantError::EmptyImage`] for an image without samples.
    pub fn analyze(&self, image: &GrayGrid) -> Result<ToneAnalysis, QuantError> {
        let histogram = self.histogram(image)?;
        let pmf = Pmf::from_histogram(&histogram)?;
        let boundaries = self.detector.detect(&pmf);
        Ok(ToneAnalysis {
            histogram,
            pmf,
            boundaries,
        })
    }

    #[cfg(feature = "parallel")]
    fn histogram(&self, image: &GrayGrid) -> Result<Histogram, QuantError> {
        if self.parallel {
            Histogram::from_gray_parallel(image)
        } else {
            Histogram::from_gray(image)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn histogram(&self, image: &GrayGrid) -> Result<Histogram, QuantError> {
        Histogram::from_gray(image)
    }
}

/// Result of [`ToneAnalyzer::analyze`].
///
/// The boundary set is fixed once produced; both quantizers borrow it.
#[derive(Debug, Clone)]
pub struct ToneAnalysis {
    histogram: Histogram,
    pmf: Pmf,
    boundaries: BoundarySet,
}

impl ToneAnalysis {
    #[inline]
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    #[inline]
    pub fn pmf(&self) -> &Pmf {
        &self.pmf
    }

    #[inline]
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// Nearest-below quantization of `image` to the detected boundaries.
    pub fn gray_reduce(&self, image: &GrayGrid) -> GrayGrid {
        gray_reduce(image, &self.boundaries)
    }

    /// Floyd-Steinberg dithering of `image` to the detected boundaries.
    pub fn dither(&self, image: &GrayGrid) -> GrayGrid {
        floyd_steinberg(image, &self.boundaries)
    }
}
