//! Configuration management for minard.
//!
//! Hosts typically embed a [`Config`] literal, but the same structs
//! deserialize from a JSON file for widgets that are configured
//! declaratively. All fields have defaults so partial configs are fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::rgb::Rgb;
use crate::error::{MinardError, Result};

/// Smallest number of classification steps a scale is allowed to use.
/// Palettes shorter than this win over the clamp.
pub const MIN_STEP_COUNT: usize = 3;

/// Which classification strategy to apply to the value attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Sequential,
    Diverging,
    Categorical,
}

/// What pointer gesture drives selection and the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayTrigger {
    Click,
    Hover,
}

/// Color-scale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Classification strategy
    #[serde(default = "default_scale_kind")]
    pub kind: ScaleKind,

    /// Ordered palette of hex color tokens
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Number of classification steps; truncates the palette to its first
    /// `step_count` entries
    #[serde(default = "default_step_count")]
    pub step_count: usize,
}

impl ScaleConfig {
    /// The step count actually used: clamped to `[MIN_STEP_COUNT,
    /// palette.len()]`, with the palette length winning for short palettes.
    pub fn effective_step_count(&self) -> usize {
        self.step_count
            .max(MIN_STEP_COUNT)
            .min(self.palette.len())
            .max(1)
    }

    /// The palette prefix classification is allowed to read.
    pub fn effective_palette(&self) -> &[String] {
        &self.palette[..self.effective_step_count().min(self.palette.len())]
    }
}

/// Selection and overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Whether selecting a feature refocuses the viewport on it
    #[serde(default)]
    pub zoom_to_selection: bool,

    /// Pointer gesture that drives selection
    #[serde(default = "default_overlay_trigger")]
    pub overlay_trigger: OverlayTrigger,

    /// Stroke color the host should use for the active feature
    #[serde(default = "default_border_color")]
    pub selection_border_color: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color-scale configuration
    #[serde(default)]
    pub scale: ScaleConfig,

    /// Selection configuration
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The selection border color as a parsed RGB value
    pub fn selection_border_rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.selection.selection_border_color)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.scale.palette.is_empty() {
            return Err(MinardError::Config {
                message: "Palette cannot be empty".to_string(),
            });
        }

        if self.scale.step_count == 0 {
            return Err(MinardError::Config {
                message: "Step count must be a positive integer".to_string(),
            });
        }

        if Rgb::from_hex(&self.selection.selection_border_color).is_err() {
            return Err(MinardError::Config {
                message: format!(
                    "Invalid selection border color: {}",
                    self.selection.selection_border_color
                ),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(MinardError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: ScaleConfig::default(),
            selection: SelectionConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            kind: default_scale_kind(),
            palette: default_palette(),
            step_count: default_step_count(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            zoom_to_selection: false,
            overlay_trigger: default_overlay_trigger(),
            selection_border_color: default_border_color(),
        }
    }
}

// Default value functions for serde
fn default_scale_kind() -> ScaleKind {
    ScaleKind::Sequential
}

fn default_palette() -> Vec<String> {
    crate::color::palettes::BLUES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_step_count() -> usize {
    5
}

fn default_overlay_trigger() -> OverlayTrigger {
    OverlayTrigger::Click
}

fn default_border_color() -> String {
    "#0099ff".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scale.kind, ScaleKind::Sequential);
        assert_eq!(config.scale.palette.len(), 9);
        assert_eq!(config.scale.step_count, 5);
        assert!(!config.selection.zoom_to_selection);
        assert_eq!(config.selection.overlay_trigger, OverlayTrigger::Click);
        assert_eq!(config.selection.selection_border_color, "#0099ff");
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_step_count_clamping() {
        let mut scale = ScaleConfig::default();

        // Below the minimum clamps up
        scale.step_count = 1;
        assert_eq!(scale.effective_step_count(), 3);

        // Above the palette length clamps down
        scale.step_count = 50;
        assert_eq!(scale.effective_step_count(), scale.palette.len());

        // Palettes shorter than the minimum win over the clamp
        scale.palette = vec!["#f7fbff".to_string(), "#4292c6".to_string()];
        scale.step_count = 5;
        assert_eq!(scale.effective_step_count(), 2);
    }

    #[test]
    fn test_effective_palette_is_prefix() {
        let scale = ScaleConfig {
            kind: ScaleKind::Sequential,
            palette: crate::color::palettes::BLUES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            step_count: 4,
        };
        let effective = scale.effective_palette();
        assert_eq!(effective.len(), 4);
        assert_eq!(effective[0], "#f7fbff");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.scale.palette.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scale.step_count = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.selection.selection_border_color = "blue-ish".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_deserializes_with_defaults() {
        let json = r#"{"scale": {"kind": "diverging", "step_count": 7}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.scale.kind, ScaleKind::Diverging);
        assert_eq!(config.scale.step_count, 7);
        assert_eq!(config.selection.overlay_trigger, OverlayTrigger::Click);
        assert_eq!(config.log_level, "info");
    }
}
