//! Legend data computation.
//!
//! Produces the color/label pairs a legend displays. Layout and styling
//! are the host's problem; this module only decides what the swatches
//! and labels are for each scale kind.

use crate::color::ramp::DEFAULT_RAMP_STOPS;
use crate::color::rgb::Rgb;
use crate::config::{ScaleConfig, ScaleKind};

/// One legend swatch: a color and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Rgb,
    pub label: String,
}

/// Compute legend entries for the given valid sample values and scale.
/// Returns an empty legend when there are no finite values.
pub fn legend_entries(values: &[f64], scale: &ScaleConfig) -> Vec<LegendEntry> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    if sorted.is_empty() {
        return Vec::new();
    }

    let palette = parse_legend_palette(scale);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    match scale.kind {
        ScaleKind::Categorical => {
            let mut distinct = sorted;
            distinct.dedup();
            distinct
                .iter()
                .enumerate()
                .map(|(i, value)| LegendEntry {
                    color: palette[i % palette.len()],
                    label: format_value(*value),
                })
                .collect()
        }
        ScaleKind::Diverging => {
            let mid = (min + max) / 2.0;
            let last = palette.len() - 1;
            [(0, min), (last / 2, mid), (last, max)]
                .into_iter()
                .map(|(slot, value)| LegendEntry {
                    color: palette[slot],
                    label: format!("{:.1}", value),
                })
                .collect()
        }
        ScaleKind::Sequential => {
            let span = (palette.len() - 1).max(1) as f64;
            palette
                .iter()
                .enumerate()
                .map(|(i, &color)| LegendEntry {
                    color,
                    label: format!("{:.1}", min + i as f64 * (max - min) / span),
                })
                .collect()
        }
    }
}

/// The palette the legend shows: the same usable prefix classification
/// reads, with the same fallback when a token fails to parse.
fn parse_legend_palette(scale: &ScaleConfig) -> Vec<Rgb> {
    let parsed: Result<Vec<Rgb>, _> = scale
        .effective_palette()
        .iter()
        .map(|token| Rgb::from_hex(token))
        .collect();

    match parsed {
        Ok(colors) if !colors.is_empty() => colors,
        _ => DEFAULT_RAMP_STOPS
            .iter()
            .map(|token| Rgb::from_hex(token).expect("built-in ramp stops are valid hex"))
            .collect(),
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(kind: ScaleKind, palette: &[&str], step_count: usize) -> ScaleConfig {
        ScaleConfig {
            kind,
            palette: palette.iter().map(|s| s.to_string()).collect(),
            step_count,
        }
    }

    const THREE_COLORS: [&str; 3] = ["#0000ff", "#ffffff", "#ff0000"];

    #[test]
    fn test_empty_values_empty_legend() {
        let scale = scale(ScaleKind::Sequential, &THREE_COLORS, 3);
        assert!(legend_entries(&[], &scale).is_empty());
        assert!(legend_entries(&[f64::NAN], &scale).is_empty());
    }

    #[test]
    fn test_sequential_legend_spacing() {
        let scale = scale(ScaleKind::Sequential, &THREE_COLORS, 3);
        let entries = legend_entries(&[0.0, 5.0, 10.0], &scale);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "0.0");
        assert_eq!(entries[1].label, "5.0");
        assert_eq!(entries[2].label, "10.0");
        assert_eq!(entries[0].color, Rgb::from_hex("#0000ff").unwrap());
        assert_eq!(entries[2].color, Rgb::from_hex("#ff0000").unwrap());
    }

    #[test]
    fn test_diverging_legend_min_mid_max() {
        let scale = scale(ScaleKind::Diverging, &THREE_COLORS, 3);
        let entries = legend_entries(&[10.0, 20.0, 30.0, 40.0], &scale);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "10.0");
        assert_eq!(entries[1].label, "25.0");
        assert_eq!(entries[2].label, "40.0");
        assert_eq!(entries[1].color, Rgb::from_hex("#ffffff").unwrap());
    }

    #[test]
    fn test_categorical_legend_distinct_values() {
        let two_colors = ["#0000ff", "#ff0000"];
        let scale = scale(ScaleKind::Categorical, &two_colors, 2);
        let entries = legend_entries(&[2.0, 1.0, 2.0, 3.0], &scale);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "1");
        assert_eq!(entries[1].label, "2");
        assert_eq!(entries[2].label, "3");
        // Colors wrap exactly like categorical classification does
        assert_eq!(entries[0].color, entries[2].color);
    }
}
