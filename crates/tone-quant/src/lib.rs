#![allow(clippy::module_inception)]

//! tone-quant: histogram-peak tone quantization for 8-bit images
//!
//! This library provides the pixel-level stages of an educational image
//! pipeline: basic filters, histogram analysis, peak detection, and two
//! quantizers driven by the detected peaks.
//!
//! # Quick Start
//!
//! The [`ToneAnalyzer`] builder runs the analysis stages in one call:
//!
//! ```
//! use tone_quant::{Grid, ToneAnalyzer};
//!
//! let grid = Grid::new(2, 2, vec![30u8, 30, 180, 180]).unwrap();
//! let analysis = ToneAnalyzer::new().analyze(&grid).unwrap();
//!
//! let reduced = analysis.gray_reduce(&grid);
//! let dithered = analysis.dither(&grid);
//! assert_eq!(reduced.dims(), dithered.dims());
//! ```
//!
//! # Data Flow
//!
//! ```text
//! grey image
//!     |
//!     v
//! Histogram          (256 counts, sum = rows * cols)
//!     |
//!     v
//! Pmf                (counts / N, sum = 1 within 1e-4)
//!     |
//!     v
//! PeakDetector       (sliding window local maxima above mean + T)
//!     |
//!     v
//! BoundarySet        {0, peaks.., 255}
//!     |
//!     +---> gray_reduce       (bucket floor per sample)
//!     |
//!     +---> floyd_steinberg   (bucket floor + error diffusion)
//! ```
//!
//! # Peak Detection
//!
//! For every candidate level `k` in `[w, 255 - w)` the detector looks at the
//! half-open window `[k - w, k + w)`. The candidate is a peak if its
//! probability is at least that of every level in the window and exceeds
//! the window mean by more than the prominence threshold `T`. The window
//! holds `2w` levels including `k` itself; [`WindowMean`] selects whether
//! the mean divides by `2w` (default) or `2w + 1`.
//!
//! # Quantization
//!
//! A [`BoundarySet`] is a strictly increasing list starting at 0 and
//! ending at 255. Each sample maps to the largest boundary not above it
//! (its bucket floor); 0 and 255 map to themselves. Construction validates
//! the list, so quantization itself cannot fail.
//!
//! Dithering visits samples in raster order and spreads
//! `sample - bucket_floor(sample)` over four neighbours with weights
//! 7, 3, 5 and 1 sixteenths. Neighbour updates saturate to `0..=255`.
//!
//! # Features
//!
//! - `parallel` (default): [`Histogram::from_gray_parallel`] splits rows
//!   across rayon workers. All other stages are sequential.

pub mod api;
pub mod error;
pub mod filter;
pub mod histogram;
pub mod image;
pub mod peaks;
pub mod quantize;


pub use api::{ToneAnalysis, ToneAnalyzer};
pub use error::{BoundaryDefect, QuantError};
pub use filter::{binary_threshold, greyscale, negate, rgb_to_hsv, rgb_to_hsv_pixel};
pub use histogram::{render_chart, Histogram, Pmf, LEVELS, PMF_TOLERANCE};
pub use image::{Dimensions, GrayGrid, Grid, Image, RgbGrid};
pub use peaks::{BoundarySet, PeakDetector, WindowMean};
pub use quantize::{floyd_steinberg, gray_reduce};
