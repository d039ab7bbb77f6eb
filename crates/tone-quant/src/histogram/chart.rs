use super::histogram::{Histogram, LEVELS};
use crate::error::QuantError;
use crate::image::{Grid, RgbGrid};

/// Chart background (white).
pub const CHART_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Bar color (magenta).
pub const BAR_COLOR: [u8; 3] = [255, 0, 255];

/// Draw `histogram` as a bar chart `height` rows tall and 256 columns wide.
///
/// Column `x` holds the bar for level `x`, rising from the bottom row. Bars
/// are scaled so the most populated level spans the full height. Each bar
/// covers `round(count * height / max) + 1` rows (clamped to `height`), so
/// every level shows at least a one-pixel baseline, empty levels included.
/// An all-zero histogram yields a blank chart.
///
/// # Errors
///
/// [`QuantError::InvalidChartHeight`] if `height` is zero.
pub fn render_chart(histogram: &Histogram, height: usize) -> Result<RgbGrid, QuantError> {
    if height == 0 {
        return Err(QuantError::InvalidChartHeight);
    }
    let mut chart = Grid::filled(height, LEVELS, CHART_BACKGROUND);
    let max = histogram.max_count();
    if max == 0 {
        return Ok(chart);
    }

    let scale = height as f64 / max as f64;
    for (x, &count) in histogram.counts().iter().enumerate() {
        let bar = ((count as f64 * scale).round() as usize + 1).min(height);
        for row in (height - bar)..height {
            chart.set(row, x, BAR_COLOR);
        }
    }
    Ok(chart)
}
