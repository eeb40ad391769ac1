//! Feature data model and sample extraction.
//!
//! The geometry loader lives in the host map widget; what reaches this
//! crate is a flat list of features with opaque identities and a property
//! bag each. This module turns the chosen value property into the numeric
//! samples the classifier consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::color::classifier::Sample;

/// Opaque feature identity. Not guaranteed stable across dataset swaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Possible property values on a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// String property
    Text(String),
    /// Numeric property
    Number(f64),
    /// Boolean property
    Bool(bool),
    /// Explicit null
    Null,
}

impl PropertyValue {
    /// Coerce to a finite number the way the rendering surface does:
    /// numbers pass through, numeric strings parse, booleans map to 1/0,
    /// everything else is no-data.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            PropertyValue::Number(n) => *n,
            PropertyValue::Text(s) => s.trim().parse::<f64>().ok()?,
            PropertyValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            PropertyValue::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Human-readable form for overlay content.
    pub fn display(&self) -> String {
        match self {
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Null => "null".to_string(),
        }
    }
}

/// One loaded feature: identity plus its property bag. Geometry stays on
/// the host side and is queried through the map port by identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub properties: HashMap<String, PropertyValue>,
}

impl Feature {
    pub fn new(id: impl Into<String>, properties: HashMap<String, PropertyValue>) -> Self {
        Self {
            id: FeatureId::new(id),
            properties,
        }
    }

    /// The feature's value for the given property, coerced to a number.
    pub fn numeric_value(&self, property: &str) -> Option<f64> {
        self.properties.get(property)?.as_number()
    }
}

/// Extract classification samples for one value property. Features with a
/// missing or non-numeric value yield invalid samples; they stay in the
/// list so paint-time lookups still resolve deterministically.
pub fn extract_samples(features: &[Feature], value_property: &str) -> Vec<Sample> {
    let samples: Vec<Sample> = features
        .iter()
        .map(|feature| Sample {
            feature: feature.id.clone(),
            value: feature.numeric_value(value_property),
        })
        .collect();

    let valid = samples.iter().filter(|s| s.value.is_some()).count();
    tracing::debug!(
        property = value_property,
        feature_count = features.len(),
        valid_samples = valid,
        "Extracted classification samples"
    );

    samples
}
