//! tonelab - histogram-driven tone quantization
//!
//! Image decode/encode, configuration and the stage-by-stage pipeline
//! around the `tone-quant` algorithms. Exposed as a library for
//! integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
