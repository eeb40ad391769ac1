//! Value-to-color classification.
//!
//! This module contains the color types, gradient ramps, built-in palette
//! tables, and the classification strategies that turn a dataset's numeric
//! attribute values into deterministic paint colors.

pub mod classifier;
pub mod palettes;
pub mod ramp;
pub mod rgb;

pub use classifier::{Classifier, Sample};
pub use palettes::get_palette;
pub use ramp::Ramp;
pub use rgb::{Rgb, NEUTRAL_SENTINEL};
