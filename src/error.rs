use std::path::PathBuf;

use thiserror::Error;
use tone_quant::QuantError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Analysis error: {0}")]
    Quant(#[from] QuantError),

    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
