//! RGB color type and hex-token utilities.
//!
//! Palette entries arrive as `#rrggbb` tokens from configuration; this
//! module parses and formats them and provides the linear interpolation
//! used by the gradient ramps.

use crate::error::{MinardError, Result};

/// An opaque 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Neutral "no data" gray. Never part of any configured palette, so it is
/// always visually distinguishable from classified values.
pub const NEUTRAL_SENTINEL: Rgb = Rgb {
    r: 204,
    g: 204,
    b: 204,
};

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `rrggbb` hex token.
    pub fn from_hex(token: &str) -> Result<Self> {
        let hex = token.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(MinardError::InvalidColor {
                token: token.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| MinardError::InvalidColor {
                token: token.to_string(),
            })
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as a `#rrggbb` token.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Linear interpolation between two colors, `t` in [0, 1].
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
    Rgb {
        r: mix(c1.r, c2.r),
        g: mix(c1.g, c2.g),
        b: mix(c1.b, c2.b),
    }
}
