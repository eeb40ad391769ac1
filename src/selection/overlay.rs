//! Overlay content descriptors.
//!
//! The coordinator describes *what* the overlay should show; the host
//! decides how the descriptor is materialized (string template, component
//! tree, callback). One representation replaces the many near-identical
//! renderings a host might otherwise hand-roll.

use std::collections::HashMap;

use crate::dataset::PropertyValue;

/// Property key that holds geometry in GeoJSON-derived property bags;
/// never shown in overlay content.
const GEOMETRY_KEY: &str = "geometry";

/// One label/value line of overlay content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayEntry {
    pub label: String,
    pub value: String,
}

/// Renderable description of the active selection's properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayContent {
    pub entries: Vec<OverlayEntry>,
}

/// Describe a feature's property bag for overlay display. Entries are
/// sorted by label so repeated renders of the same feature are identical.
pub fn render_overlay(properties: &HashMap<String, PropertyValue>) -> OverlayContent {
    let mut entries: Vec<OverlayEntry> = properties
        .iter()
        .filter(|(key, _)| key.as_str() != GEOMETRY_KEY)
        .map(|(key, value)| OverlayEntry {
            label: key.clone(),
            value: value.display(),
        })
        .collect();
    entries.sort_by(|a, b| a.label.cmp(&b.label));

    OverlayContent { entries }
}
