//! Gradient ramps over palette stops.
//!
//! A ramp spreads its stop colors evenly over [0, 1] and interpolates
//! linearly between neighboring stops, so `sample(0.5)` on an odd-length
//! palette lands exactly on the middle stop. This is what lets the
//! diverging classifier pin its central color to the data median.

use super::rgb::{lerp_color, Rgb};

/// Canonical fallback: lightest and darkest stops of the built-in blue
/// palette. Used whenever a configured palette fails to parse.
pub const DEFAULT_RAMP_STOPS: [&str; 2] = ["#f7fbff", "#4292c6"];

/// A piecewise-linear color gradient over evenly spaced stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    stops: Vec<Rgb>,
}

impl Ramp {
    /// Build a ramp from parsed palette colors. Must be non-empty; callers
    /// fall back to [`Ramp::default_blue`] before reaching this with an
    /// empty palette.
    pub fn new(stops: Vec<Rgb>) -> Self {
        debug_assert!(!stops.is_empty());
        Self { stops }
    }

    /// The two-stop blue fallback ramp.
    pub fn default_blue() -> Self {
        let stops = DEFAULT_RAMP_STOPS
            .iter()
            .map(|token| Rgb::from_hex(token).expect("built-in ramp stops are valid hex"))
            .collect();
        Self { stops }
    }

    /// Number of stops in this ramp.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sample the gradient at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> Rgb {
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }

        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let position = t * last as f64;
        let index = position.floor() as usize;
        if index >= last {
            return self.stops[last];
        }

        let frac = position - index as f64;
        lerp_color(self.stops[index], self.stops[index + 1], frac)
    }
}
