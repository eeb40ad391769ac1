//! Test dataset builders.

use std::collections::HashMap;

use minard::{Feature, PropertyValue};

/// A small "states" dataset with a numeric population density property
/// and one feature with an unparseable value.
pub fn density_features() -> Vec<Feature> {
    let mut features: Vec<Feature> = [
        ("oh", "Ohio", 10.0),
        ("in", "Indiana", 20.0),
        ("il", "Illinois", 30.0),
        ("mi", "Michigan", 40.0),
        ("wi", "Wisconsin", 50.0),
        ("mn", "Minnesota", 60.0),
    ]
    .into_iter()
    .map(|(id, name, density)| {
        Feature::new(
            id,
            HashMap::from([
                ("name".to_string(), PropertyValue::Text(name.to_string())),
                ("density".to_string(), PropertyValue::Number(density)),
            ]),
        )
    })
    .collect();

    features.push(Feature::new(
        "xx",
        HashMap::from([
            (
                "name".to_string(),
                PropertyValue::Text("Unknown".to_string()),
            ),
            (
                "density".to_string(),
                PropertyValue::Text("n/a".to_string()),
            ),
        ]),
    ));

    features
}

/// Categorical dataset: region codes 1, 2, 1, 3.
pub fn region_code_features() -> Vec<Feature> {
    [("a", 1.0), ("b", 2.0), ("c", 1.0), ("d", 3.0)]
        .into_iter()
        .map(|(id, code)| {
            Feature::new(
                id,
                HashMap::from([("region".to_string(), PropertyValue::Number(code))]),
            )
        })
        .collect()
}
