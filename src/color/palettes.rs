//! Built-in palette tables.
//!
//! Hard-coded scheme tables are configuration data, not logic: they live
//! here as static constants, loaded once, never mutated at runtime. The
//! series are standard ColorBrewer ramps.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{MinardError, Result};

/// Sequential blues (ColorBrewer 9-class Blues).
pub const BLUES: [&str; 9] = [
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];

/// Diverging red-yellow-blue (ColorBrewer 9-class RdYlBu).
pub const RDYLBU: [&str; 9] = [
    "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9", "#74add1",
    "#4575b4",
];

/// Categorical pastels (ColorBrewer 8-class Set2).
pub const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac8", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

static PALETTES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    table.insert("blues", &BLUES);
    table.insert("rdylbu", &RDYLBU);
    table.insert("set2", &SET2);
    table
});

/// Get a built-in palette by name.
pub fn get_palette(name: &str) -> Result<&'static [&'static str]> {
    PALETTES
        .get(name.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| MinardError::InvalidParameter {
            param: "palette".to_string(),
            message: format!("Unknown palette: {}", name),
        })
}
