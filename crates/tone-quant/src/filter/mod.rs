//! Stateless per-pixel filters.
//!
//! These are the preparatory stages of the pipeline: each one maps every
//! sample independently and returns a new grid of the same shape.
//!
//! - [`negate`]: `255 - v` on every component
//! - [`greyscale`]: three-channel mean to a single channel
//! - [`binary_threshold`]: two-level black and white
//! - [`rgb_to_hsv`]: hue, saturation, value scaled to 0..=255

mod greyscale;
mod hsv;
mod negate;
mod threshold;

pub use greyscale::greyscale;
pub use hsv::{rgb_to_hsv, rgb_to_hsv_pixel};
pub use negate::negate;
pub use threshold::binary_threshold;
