//! A scripted map port that records every side effect it receives.

use std::collections::HashMap;

use minard::{
    Coordinate, Extent, Feature, FeatureId, MapPort, OverlayContent, Pixel,
};

/// What the coordinator asked the map to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PortEvent {
    ShowOverlay {
        feature_hint: Coordinate,
        content: OverlayContent,
    },
    HideOverlay,
    AnimateViewport {
        center: Coordinate,
        zoom: f64,
        duration_ms: u64,
    },
}

/// A fake map widget: hit tests resolve against a scripted pixel->feature
/// table, geometry queries against per-feature tables, and every side
/// effect is recorded for assertion.
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub hits: HashMap<(i64, i64), Feature>,
    pub interior_points: HashMap<FeatureId, Coordinate>,
    pub extents: HashMap<FeatureId, Extent>,
    pub fit_zoom: Option<f64>,
    pub events: Vec<PortEvent>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a feature at a pixel, with an interior point and extent.
    pub fn place_feature(
        &mut self,
        pixel: Pixel,
        feature: Feature,
        interior: Coordinate,
        extent: Extent,
    ) {
        self.interior_points.insert(feature.id.clone(), interior);
        self.extents.insert(feature.id.clone(), extent);
        self.hits
            .insert((pixel.x as i64, pixel.y as i64), feature);
    }

    /// Script a feature whose geometry supports no interior point.
    pub fn place_feature_without_interior(
        &mut self,
        pixel: Pixel,
        feature: Feature,
        extent: Extent,
    ) {
        self.extents.insert(feature.id.clone(), extent);
        self.hits
            .insert((pixel.x as i64, pixel.y as i64), feature);
    }

    pub fn overlay_shows(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PortEvent::ShowOverlay { .. }))
            .count()
    }

    pub fn overlay_hides(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PortEvent::HideOverlay))
            .count()
    }

    pub fn animations(&self) -> Vec<&PortEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, PortEvent::AnimateViewport { .. }))
            .collect()
    }
}

impl MapPort for RecordingPort {
    fn hit_test(&self, pixel: Pixel) -> Option<Feature> {
        self.hits.get(&(pixel.x as i64, pixel.y as i64)).cloned()
    }

    fn interior_point(&self, feature: &FeatureId) -> Option<Coordinate> {
        self.interior_points.get(feature).copied()
    }

    fn extent(&self, feature: &FeatureId) -> Option<Extent> {
        self.extents.get(feature).copied()
    }

    fn zoom_for_extent(&self, _extent: &Extent) -> Option<f64> {
        self.fit_zoom
    }

    fn show_overlay(&mut self, anchor: Coordinate, content: OverlayContent) {
        self.events.push(PortEvent::ShowOverlay {
            feature_hint: anchor,
            content,
        });
    }

    fn hide_overlay(&mut self) {
        self.events.push(PortEvent::HideOverlay);
    }

    fn animate_viewport(&mut self, center: Coordinate, zoom: f64, duration_ms: u64) {
        self.events.push(PortEvent::AnimateViewport {
            center,
            zoom,
            duration_ms,
        });
    }
}
