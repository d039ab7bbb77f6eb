mod config;
mod stage;

pub use config::{ConfigOverrides, ConfigSource, MeanMode, PipelineConfig, CONFIG_ENV};
pub use stage::Stage;
