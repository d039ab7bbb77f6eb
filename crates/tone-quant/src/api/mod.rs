//! High-level entry point: [`ToneAnalyzer`] builder and its [`ToneAnalysis`] result.

mod builder;

pub use builder::{ToneAnalysis, ToneAnalyzer};
