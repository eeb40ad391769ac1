//! Value-to-color classification strategies.
//!
//! [`Classifier::build`] digests a dataset's numeric samples plus a scale
//! configuration into an immutable classifier; [`Classifier::classify`]
//! then resolves colors on the render hot path. Classification never
//! fails at paint time: a broken palette degrades to the default blue
//! ramp at build time, and non-finite or unknown query values resolve to
//! the neutral sentinel.

use tracing::warn;

use crate::config::{ScaleConfig, ScaleKind};
use crate::dataset::FeatureId;

use super::ramp::Ramp;
use super::rgb::{Rgb, NEUTRAL_SENTINEL};

/// One observation: a feature identity and its (possibly invalid) value.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub feature: FeatureId,
    /// `None` when the source property was missing, non-numeric, or NaN.
    pub value: Option<f64>,
}

/// An immutable value-to-color mapping. Cheap to query, safe to share,
/// and re-entrant: it holds no mutable state after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Classifier {
    /// No valid samples; everything maps to the neutral sentinel.
    Empty,
    /// Quantile-binned gradient for monotonic data.
    Sequential { breaks: Vec<f64>, ramp: Ramp },
    /// Midpoint-split gradient; the ramp center pins to the data median.
    Diverging {
        min: f64,
        midpoint: f64,
        max: f64,
        ramp: Ramp,
    },
    /// Exact lookup from distinct values to palette slots.
    Categorical {
        categories: Vec<f64>,
        palette: Vec<Rgb>,
    },
}

impl Classifier {
    /// Build a classifier from the dataset's samples and a scale config.
    pub fn build(samples: &[Sample], config: &ScaleConfig) -> Self {
        let mut values: Vec<f64> = samples
            .iter()
            .filter_map(|s| s.value)
            .filter(|v| v.is_finite())
            .collect();
        values.sort_by(f64::total_cmp);

        if values.is_empty() {
            return Classifier::Empty;
        }

        let palette = parse_palette(config);
        let classifier = match config.kind {
            ScaleKind::Sequential => build_sequential(&values, palette),
            ScaleKind::Diverging => build_diverging(&values, palette),
            ScaleKind::Categorical => build_categorical(&values, palette),
        };

        tracing::debug!(
            kind = ?config.kind,
            sample_count = values.len(),
            step_count = config.effective_step_count(),
            "Built classifier"
        );

        classifier
    }

    /// Resolve the paint color for a value. Total over all inputs; a
    /// non-finite value is the neutral sentinel for every scale kind.
    pub fn classify(&self, value: f64) -> Rgb {
        if !value.is_finite() {
            return NEUTRAL_SENTINEL;
        }

        match self {
            Classifier::Empty => NEUTRAL_SENTINEL,
            Classifier::Sequential { breaks, ramp } => classify_sequential(breaks, ramp, value),
            Classifier::Diverging {
                min,
                midpoint,
                max,
                ramp,
            } => ramp.sample(diverging_position(value, *min, *midpoint, *max)),
            Classifier::Categorical {
                categories,
                palette,
            } => match categories.binary_search_by(|c| c.total_cmp(&value)) {
                Ok(index) => palette[index % palette.len()],
                Err(_) => NEUTRAL_SENTINEL,
            },
        }
    }

    /// Sequential break boundaries, when this is a sequential classifier.
    pub fn breaks(&self) -> Option<&[f64]> {
        match self {
            Classifier::Sequential { breaks, .. } => Some(breaks),
            _ => None,
        }
    }

    /// The data median a diverging classifier splits at.
    pub fn midpoint(&self) -> Option<f64> {
        match self {
            Classifier::Diverging { midpoint, .. } => Some(*midpoint),
            _ => None,
        }
    }
}

/// Parse the usable palette prefix; any bad token degrades the whole
/// palette to the default blue ramp rather than failing construction.
fn parse_palette(config: &ScaleConfig) -> Vec<Rgb> {
    let parsed: Result<Vec<Rgb>, _> = config
        .effective_palette()
        .iter()
        .map(|token| Rgb::from_hex(token))
        .collect();

    match parsed {
        Ok(colors) if !colors.is_empty() => colors,
        _ => {
            warn!(
                palette = ?config.palette,
                "Palette failed to parse, falling back to the default blue ramp"
            );
            let fallback = Ramp::default_blue();
            vec![fallback.sample(0.0), fallback.sample(1.0)]
        }
    }
}

fn build_sequential(sorted: &[f64], palette: Vec<Rgb>) -> Classifier {
    let n = sorted.len();
    let k = palette.len();

    // Quantile breaks: dense clusters get more visual resolution than
    // sparse tails, unlike an equal-width min-max split.
    let breaks: Vec<f64> = (0..=k).map(|i| sorted[i * (n - 1) / k]).collect();

    Classifier::Sequential {
        breaks,
        ramp: Ramp::new(palette),
    }
}

fn build_diverging(sorted: &[f64], palette: Vec<Rgb>) -> Classifier {
    Classifier::Diverging {
        min: sorted[0],
        midpoint: sorted[sorted.len() / 2],
        max: sorted[sorted.len() - 1],
        ramp: Ramp::new(palette),
    }
}

fn build_categorical(sorted: &[f64], palette: Vec<Rgb>) -> Classifier {
    let mut categories = sorted.to_vec();
    categories.dedup_by(|a, b| a == b);

    Classifier::Categorical {
        categories,
        palette,
    }
}

fn classify_sequential(breaks: &[f64], ramp: &Ramp, value: f64) -> Rgb {
    let k = breaks.len() - 1;

    // Find the break interval [breaks[i], breaks[i+1]) containing the
    // value; the last interval is closed on the right.
    let interval = (0..=k).find(|&i| value >= breaks[i] && (i == k || value < breaks[i + 1]));

    let index = match interval {
        None => return ramp.sample(0.0),
        Some(i) if i == k => return ramp.sample(1.0),
        Some(i) => i,
    };

    let start = breaks[index];
    let end = breaks[index + 1];
    // Duplicate quantile boundaries produce zero-width intervals.
    let frac = if end > start {
        (value - start) / (end - start)
    } else {
        0.0
    };

    // Interval position across the scale plus the fractional position
    // inside the interval, so gradients stay smooth across break edges.
    let t = index as f64 / k.saturating_sub(1).max(1) as f64 + frac / k as f64;
    ramp.sample(t)
}

/// Normalized ramp position for a diverging scale. The midpoint maps to
/// exactly 0.5; each half collapses to its boundary when the data leaves
/// that half degenerate (midpoint equal to min or max).
fn diverging_position(value: f64, min: f64, midpoint: f64, max: f64) -> f64 {
    if value == midpoint {
        return 0.5;
    }

    if value < midpoint {
        let span = midpoint - min;
        if span > 0.0 {
            ((value - min) / span * 0.5).clamp(0.0, 0.5)
        } else {
            0.0
        }
    } else {
        let span = max - midpoint;
        if span > 0.0 {
            (0.5 + (value - midpoint) / span * 0.5).clamp(0.5, 1.0)
        } else {
            1.0
        }
    }
}
