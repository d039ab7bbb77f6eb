use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tone_quant::peaks::{DEFAULT_HALF_WINDOW, DEFAULT_THRESHOLD};
use tone_quant::{PeakDetector, QuantError, WindowMean};

use crate::error::PipelineError;

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "TONELAB_CONFIG";

/// Window-mean normalization as written in config files and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MeanMode {
    /// Divide the window sum by the number of levels summed (2w)
    #[default]
    Exact,
    /// Divide the window sum by 2w + 1
    Legacy,
}

impl From<MeanMode> for WindowMean {
    fn from(mode: MeanMode) -> Self {
        match mode {
            MeanMode::Exact => WindowMean::Exact,
            MeanMode::Legacy => WindowMean::Legacy,
        }
    }
}

/// Pipeline tuning loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Peak detector half-window radius (1..=127)
    pub half_window: usize,

    /// Peak prominence threshold above the window mean
    pub threshold: f32,

    /// Window-mean normalization
    pub mean: MeanMode,

    /// Black-and-white cut-off as a fraction of full scale
    pub binary_threshold: f32,

    /// Height in pixels of the rendered histogram chart
    pub histogram_height: usize,

    /// Split histogram counting across worker threads
    pub parallel_histogram: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            half_window: DEFAULT_HALF_WINDOW,
            threshold: DEFAULT_THRESHOLD,
            mean: MeanMode::Exact,
            binary_threshold: 0.25,
            histogram_height: 100,
            parallel_histogram: true,
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag or the config environment variable
    File(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// CLI flags that override file values when present.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub half_window: Option<usize>,
    pub threshold: Option<f32>,
    pub mean: Option<MeanMode>,
    pub binary_threshold: Option<f32>,
}

impl PipelineConfig {
    /// Resolve the config file: explicit path first, then the environment.
    pub fn resolve_source(explicit: Option<&Path>) -> ConfigSource {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
            .map(ConfigSource::File)
            .unwrap_or(ConfigSource::Defaults)
    }

    /// Load configuration from `source`.
    ///
    /// A named file must exist and parse; there is no silent fallback to
    /// defaults once a file was asked for.
    pub fn load(source: &ConfigSource) -> Result<Self, PipelineError> {
        match source {
            ConfigSource::Defaults => Ok(Self::default()),
            ConfigSource::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    PipelineError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                let config = Self::from_yaml_str(&content)?;
                tracing::info!(
                    path = %path.display(),
                    half_window = config.half_window,
                    threshold = config.threshold,
                    "Loaded configuration"
                );
                Ok(config)
            }
        }
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, PipelineError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Apply CLI overrides on top of file values.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(w) = overrides.half_window {
            self.half_window = w;
        }
        if let Some(t) = overrides.threshold {
            self.threshold = t;
        }
        if let Some(mean) = overrides.mean {
            self.mean = mean;
        }
        if let Some(b) = overrides.binary_threshold {
            self.binary_threshold = b;
        }
        self
    }

    /// Build the peak detector, validating half-window and threshold.
    pub fn detector(&self) -> Result<PeakDetector, QuantError> {
        Ok(PeakDetector::new(self.half_window, self.threshold)?.window_mean(self.mean.into()))
    }

    /// Check every value before any stage runs.
    pub fn validate(&self) -> Result<(), QuantError> {
        self.detector()?;
        if !self.binary_threshold.is_finite() || !(0.0..=1.0).contains(&self.binary_threshold) {
            return Err(QuantError::InvalidBinaryThreshold(self.binary_threshold));
        }
        if self.histogram_height == 0 {
            return Err(QuantError::InvalidChartHeight);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.half_window, 5);
        assert!((config.threshold - 0.0003).abs() < f32::EPSILON);
        assert_eq!(config.mean, MeanMode::Exact);
        assert!((config.binary_threshold - 0.25).abs() < f32::EPSILON);
        assert_eq!(config.histogram_height, 100);
        assert!(config.parallel_histogram);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PipelineConfig::from_yaml_str("half_window: 8\nmean: legacy\n").unwrap();
        assert_eq!(config.half_window, 8);
        assert_eq!(config.mean, MeanMode::Legacy);
        assert_eq!(config.histogram_height, 100);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            PipelineConfig::from_yaml_str("  \n").unwrap(),
            PipelineConfig::default()
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = PipelineConfig::from_yaml_str("half_windw: 3\n").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            half_window: Some(3),
            threshold: None,
            mean: Some(MeanMode::Legacy),
            binary_threshold: Some(0.5),
        };
        let config = PipelineConfig::default().with_overrides(&overrides);
        assert_eq!(config.half_window, 3);
        assert!((config.threshold - 0.0003).abs() < f32::EPSILON);
        assert_eq!(config.mean, MeanMode::Legacy);
        assert!((config.binary_threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = PipelineConfig {
            half_window: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(QuantError::InvalidHalfWindow(0)));

        let config = PipelineConfig {
            binary_threshold: 2.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(QuantError::InvalidBinaryThreshold(2.0))
        );

        let config = PipelineConfig {
            histogram_height: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(QuantError::InvalidChartHeight));
    }

    #[test]
    fn test_detector_carries_mean() {
        let config = PipelineConfig {
            mean: MeanMode::Legacy,
            ..Default::default()
        };
        assert_eq!(config.detector().unwrap().mean(), WindowMean::Legacy);
    }

    #[test]
    fn test_explicit_source_wins() {
        let source = PipelineConfig::resolve_source(Some(Path::new("custom.yaml")));
        assert_eq!(source, ConfigSource::File(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn test_missing_file_is_error() {
        let source = ConfigSource::File(PathBuf::from("/nonexistent/tonelab.yaml"));
        assert!(matches!(
            PipelineConfig::load(&source),
            Err(PipelineError::Config(_))
        ));
    }
}
