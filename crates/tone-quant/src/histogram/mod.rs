//! Intensity statistics of single-channel images.
//!
//! [`Histogram`] counts samples per level; [`Pmf`] normalizes those counts
//! into a probability mass function that the peak detector scans.
//! [`render_chart`] draws a histogram as a bar chart image.

mod chart;
mod histogram;
mod pmf;

pub use chart::{render_chart, BAR_COLOR, CHART_BACKGROUND};
pub use histogram::{Histogram, LEVELS};
pub use pmf::{Pmf, PMF_TOLERANCE};
