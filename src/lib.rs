//! # minard
//!
//! Choropleth classification and selection coordination for map widgets.
//!
//! This library provides the data-driven core of a choropleth map: turning
//! a dataset's numeric attribute into deterministic paint colors, and
//! tracking which feature is selected as the user clicks or hovers.
//!
//! ## Key features
//!
//! - **Three classification strategies**: sequential quantile-binned,
//!   diverging midpoint-split, and categorical index-mapped color scales
//! - **Total on the hot path**: classification never fails at paint time;
//!   bad palettes and missing data degrade to visually sensible defaults
//! - **Widget-agnostic selection**: a small state machine drives overlay
//!   and viewport side effects through a capability trait, so any map
//!   widget can host it
//!
//! ## Architecture
//!
//! - **Color layer**: palettes, gradient ramps, and the classifier
//! - **Dataset layer**: features, property coercion, sample extraction
//! - **Selection layer**: the active-feature state machine and overlay
//!   content descriptors, behind the [`MapPort`] seam

pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod legend;
pub mod logging;
pub mod selection;

pub use color::{get_palette, Classifier, Ramp, Rgb, Sample, NEUTRAL_SENTINEL};
pub use config::{Config, OverlayTrigger, ScaleConfig, ScaleKind, SelectionConfig};
pub use dataset::{extract_samples, Feature, FeatureId, PropertyValue};
pub use error::{MinardError, Result};
pub use legend::{legend_entries, LegendEntry};
pub use logging::{init_tracing, log_error, log_timed_operation};
pub use selection::{
    render_overlay, Coordinate, Extent, MapPort, OverlayContent, OverlayEntry, Pixel,
    SelectionCoordinator, SelectionState,
};
