//! Tone quantization against a [`BoundarySet`](crate::BoundarySet).
//!
//! Two consumers of the same boundaries:
//!
//! - [`gray_reduce`]: every sample replaced by its bucket floor
//! - [`floyd_steinberg`]: bucket floors with the quantization error diffused
//!   to neighbouring samples

mod floyd_steinberg;
mod gray_reduce;
mod kernel;

pub use floyd_steinberg::floyd_steinberg;
pub use gray_reduce::gray_reduce;
pub use kernel::{Kernel, FLOYD_STEINBERG};
