//! The selection state machine.
//!
//! Tracks the single active feature, derives its anchor coordinate, and
//! drives overlay and viewport side effects through the host-supplied
//! [`MapPort`]. All transitions run synchronously inside the host's
//! pointer-event handler; the coordinator borrows the port per event
//! rather than owning the widget, so there is no cyclic ownership between
//! controller and renderer.

use tracing::{debug, warn};

use crate::config::{OverlayTrigger, SelectionConfig};
use crate::dataset::{Feature, FeatureId};

use super::overlay::{render_overlay, OverlayContent};

/// Extra zoom applied on top of the extent-fitting zoom when refocusing.
const SELECTION_ZOOM_PADDING: f64 = 0.5;
/// Ceiling on selection zoom so tiny features don't over-zoom.
const MAX_SELECTION_ZOOM: f64 = 6.0;
/// Fixed, bounded duration of the viewport refocus animation.
const SELECTION_ANIMATION_MS: u64 = 500;

/// A pixel-space position from a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

/// A map-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

/// A feature's bounding extent in map space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// The bounding-box center, used as the anchor fallback when interior
    /// point computation is unavailable.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }
}

/// A feature resolved by hit testing: identity plus property bag.
/// Geometry stays host-side and is queried back through the port.
pub type FeatureRef = Feature;

/// Capabilities the host map widget lends to the coordinator.
pub trait MapPort {
    /// Resolve a pixel position to the topmost feature, if any.
    fn hit_test(&self, pixel: Pixel) -> Option<FeatureRef>;

    /// A point guaranteed to lie inside the feature's geometry. `None`
    /// when the geometry kind doesn't support it.
    fn interior_point(&self, feature: &FeatureId) -> Option<Coordinate>;

    /// The feature's bounding extent. `None` when geometry is missing.
    fn extent(&self, feature: &FeatureId) -> Option<Extent>;

    /// Zoom level at which the extent fits the current viewport.
    fn zoom_for_extent(&self, extent: &Extent) -> Option<f64>;

    /// Place the overlay at an anchor and hand it content to show.
    fn show_overlay(&mut self, anchor: Coordinate, content: OverlayContent);

    /// Hide the overlay.
    fn hide_overlay(&mut self);

    /// Animate the viewport toward a center and zoom. A newer request
    /// replaces any in-flight one wholesale.
    fn animate_viewport(&mut self, center: Coordinate, zoom: f64, duration_ms: u64);
}

/// Selection lifecycle state. Exactly one feature may be active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Active {
        feature: FeatureRef,
        anchor: Option<Coordinate>,
    },
}

/// Stateful controller coordinating selection, overlay, and viewport.
#[derive(Debug)]
pub struct SelectionCoordinator {
    config: SelectionConfig,
    state: SelectionState,
}

impl SelectionCoordinator {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            state: SelectionState::Idle,
        }
    }

    /// Current state, for hosts that restyle strokes on selection change.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The active feature's identity and properties, if any.
    pub fn current_selection(&self) -> Option<&FeatureRef> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Active { feature, .. } => Some(feature),
        }
    }

    /// The active feature's anchor coordinate, if one could be derived.
    pub fn anchor(&self) -> Option<Coordinate> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Active { anchor, .. } => *anchor,
        }
    }

    /// Handle a pointer click. Resolves the pixel against the feature
    /// index and runs the selection transition; clicks may refocus the
    /// viewport when `zoom_to_selection` is configured.
    pub fn on_pointer_click(&mut self, pixel: Pixel, port: &mut dyn MapPort) {
        if self.config.overlay_trigger != OverlayTrigger::Click {
            return;
        }
        match port.hit_test(pixel) {
            Some(feature) => self.select(feature, port, self.config.zoom_to_selection),
            None => self.deselect(port),
        }
    }

    /// Handle a pointer move. Only acts when hover triggering is
    /// configured, and never arms the viewport animation.
    pub fn on_pointer_move(&mut self, pixel: Pixel, port: &mut dyn MapPort) {
        if self.config.overlay_trigger != OverlayTrigger::Hover {
            return;
        }
        match port.hit_test(pixel) {
            Some(feature) => self.select(feature, port, false),
            None => self.deselect(port),
        }
    }

    /// The dataset was swapped out. Feature identities are not stable
    /// across swaps, so any selection is unconditionally cleared.
    pub fn dataset_replaced(&mut self, port: &mut dyn MapPort) {
        if self.state != SelectionState::Idle {
            debug!("Dataset replaced, clearing selection");
        }
        self.state = SelectionState::Idle;
        port.hide_overlay();
    }

    fn select(&mut self, feature: FeatureRef, port: &mut dyn MapPort, refocus: bool) {
        let anchor = self.resolve_anchor(&feature.id, port);

        match anchor {
            Some(anchor) => {
                port.show_overlay(anchor, render_overlay(&feature.properties));

                if refocus {
                    if let Some(zoom) = port
                        .extent(&feature.id)
                        .and_then(|extent| port.zoom_for_extent(&extent))
                    {
                        let zoom = (zoom + SELECTION_ZOOM_PADDING).min(MAX_SELECTION_ZOOM);
                        port.animate_viewport(anchor, zoom, SELECTION_ANIMATION_MS);
                    } else {
                        port.animate_viewport(anchor, MAX_SELECTION_ZOOM, SELECTION_ANIMATION_MS);
                    }
                }
            }
            None => {
                // Selection still succeeds; the overlay just has nowhere
                // to anchor.
                warn!(
                    feature = feature.id.as_str(),
                    "No anchor available for selected feature, overlay stays hidden"
                );
                port.hide_overlay();
            }
        }

        debug!(feature = feature.id.as_str(), "Feature selected");
        self.state = SelectionState::Active { feature, anchor };
    }

    fn deselect(&mut self, port: &mut dyn MapPort) {
        if let SelectionState::Active { feature, .. } = &self.state {
            debug!(feature = feature.id.as_str(), "Selection cleared");
            port.hide_overlay();
            self.state = SelectionState::Idle;
        }
        // Viewport stays where it is on deselection.
    }

    /// Anchor resolution order: interior point, then bounding-box center.
    /// Interior points keep the overlay inside concave shapes; the center
    /// is an acceptable approximation when the geometry kind doesn't
    /// support them.
    fn resolve_anchor(&self, feature: &FeatureId, port: &dyn MapPort) -> Option<Coordinate> {
        if let Some(point) = port.interior_point(feature) {
            return Some(point);
        }
        port.extent(feature).map(|extent| extent.center())
    }
}
