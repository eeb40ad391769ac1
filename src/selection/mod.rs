//! Feature selection and overlay coordination.
//!
//! This module owns the "which feature is active" state machine and the
//! overlay content descriptor. The map widget itself stays on the other
//! side of the [`MapPort`] capability trait.

pub mod coordinator;
pub mod overlay;

pub use coordinator::{
    Coordinate, Extent, FeatureRef, MapPort, Pixel, SelectionCoordinator, SelectionState,
};
pub use overlay::{render_overlay, OverlayContent, OverlayEntry};
