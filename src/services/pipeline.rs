use std::path::{Path, PathBuf};

use tone_quant::{
    binary_threshold, greyscale, negate, render_chart, rgb_to_hsv, BoundarySet, GrayGrid, Image,
    RgbGrid, ToneAnalysis, ToneAnalyzer,
};

use crate::error::PipelineError;
use crate::models::{PipelineConfig, Stage};
use crate::rendering::{decode_image, write_png};

/// Every image the pipeline produces, plus the detected boundaries.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub negative: Image,
    pub greyscale: GrayGrid,
    pub black_and_white: GrayGrid,
    pub hsv: RgbGrid,
    pub histogram_chart: RgbGrid,
    pub analysis: ToneAnalysis,
    pub gray_reduced: GrayGrid,
    pub floyd: GrayGrid,
}

impl PipelineOutput {
    pub fn boundaries(&self) -> &BoundarySet {
        self.analysis.boundaries()
    }

    /// Output image of one stage.
    pub fn stage_image(&self, stage: Stage) -> Image {
        match stage {
            Stage::Negative => self.negative.clone(),
            Stage::Greyscale => self.greyscale.clone().into(),
            Stage::BlackAndWhite => self.black_and_white.clone().into(),
            Stage::Hsv => self.hsv.clone().into(),
            Stage::Histogram => self.histogram_chart.clone().into(),
            Stage::GrayReduction => self.gray_reduced.clone().into(),
            Stage::FloydSteinberg => self.floyd.clone().into(),
        }
    }

    /// Write every stage next to `input` inside `out_dir`.
    ///
    /// Returns the written paths in stage order.
    pub fn write_all(&self, input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
        let mut written = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let path = stage.output_path(input, out_dir);
            write_png(&self.stage_image(stage), &path)?;
            tracing::debug!(stage = %stage, path = %path.display(), "Wrote stage output");
            written.push(path);
        }
        Ok(written)
    }
}

/// Runs the fixed filter sequence over one image.
pub struct Pipeline {
    config: PipelineConfig,
    analyzer: ToneAnalyzer,
}

impl Pipeline {
    /// Validate `config` and build the analyzer.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let analyzer = ToneAnalyzer::new()
            .detector(config.detector()?)
            .parallel(config.parallel_histogram);
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Histogram, PMF and boundaries of the greyscale version of `image`.
    pub fn analyze(&self, image: &Image) -> Result<ToneAnalysis, PipelineError> {
        let grey = greyscale(image);
        Ok(self.analyzer.analyze(&grey)?)
    }

    /// Run every stage on a decoded image.
    pub fn run(&self, image: &Image) -> Result<PipelineOutput, PipelineError> {
        let dims = image.dims();
        if dims.is_empty() {
            return Err(tone_quant::QuantError::EmptyImage.into());
        }
        tracing::info!(
            rows = dims.rows,
            cols = dims.cols,
            channels = image.channels(),
            "Processing image"
        );

        let negative = negate(image);
        let greyscale = greyscale(image);
        let black_and_white = binary_threshold(&greyscale, self.config.binary_threshold)?;
        let hsv = rgb_to_hsv(&image.to_rgb());

        let analysis = self.analyzer.analyze(&greyscale)?;
        let histogram_chart = render_chart(analysis.histogram(), self.config.histogram_height)?;
        tracing::info!(
            pixels = analysis.histogram().total(),
            peaks = analysis.boundaries().peaks().len(),
            boundaries = %analysis.boundaries(),
            "Detected histogram peaks"
        );

        let gray_reduced = analysis.gray_reduce(&greyscale);
        let floyd = analysis.dither(&greyscale);

        Ok(PipelineOutput {
            negative,
            greyscale,
            black_and_white,
            hsv,
            histogram_chart,
            analysis,
            gray_reduced,
            floyd,
        })
    }

    /// Decode `input`, run every stage and write the outputs.
    pub fn run_file(&self, input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
        let image = decode_image(input)?;
        let output = self.run(&image)?;
        std::fs::create_dir_all(out_dir)?;
        let written = output.write_all(input, out_dir)?;
        tracing::info!(files = written.len(), out_dir = %out_dir.display(), "Pipeline complete");
        Ok(written)
    }
}
