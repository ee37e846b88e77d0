//! Widget configuration
//!
//! Sheets and sliders read their tunables from a `widgets.toml`:
//!
//! ```toml
//! [sheet]
//! skip_partially_expanded = false
//! positional_threshold = 56.0
//!
//! [sheet.hide_animation]
//! type = "tween"
//! duration_ms = 200
//! easing = "fast_out_linear_in"
//!
//! [slider]
//! steps = 4
//! ```
//!
//! Every field is optional and falls back to its default.

use std::fs;
use std::path::Path;

use composables_anchored::{DEFAULT_POSITIONAL_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD};
use composables_animation::{AnimationSpec, Easing};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Duration of the default sheet motions
const SHEET_MOTION_MS: u64 = 300;

fn default_sheet_motion() -> AnimationSpec {
    AnimationSpec::tween(SHEET_MOTION_MS, Easing::FastOutSlowIn)
}

/// Top level of a widget configuration file
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub slider: SliderConfig,
}

impl WidgetsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded widget configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Modal bottom sheet configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SheetConfig {
    /// Go straight from hidden to expanded for tall content
    #[serde(default)]
    pub skip_partially_expanded: bool,
    /// Keep the sheet from ever hiding
    #[serde(default)]
    pub skip_hidden_state: bool,
    /// Distance in pixels a release must travel to commit to the next state
    #[serde(default = "default_positional_threshold")]
    pub positional_threshold: f32,
    /// Fling speed in pixels per second that commits regardless of distance
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f32,
    /// Motion used when settling after a drag and when expanding
    #[serde(default = "default_sheet_motion")]
    pub animation: AnimationSpec,
    #[serde(default = "default_sheet_motion")]
    pub show_animation: AnimationSpec,
    #[serde(default = "default_sheet_motion")]
    pub hide_animation: AnimationSpec,
}

fn default_positional_threshold() -> f32 {
    DEFAULT_POSITIONAL_THRESHOLD
}

fn default_velocity_threshold() -> f32 {
    DEFAULT_VELOCITY_THRESHOLD
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            skip_partially_expanded: false,
            skip_hidden_state: false,
            positional_threshold: DEFAULT_POSITIONAL_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            animation: default_sheet_motion(),
            show_animation: default_sheet_motion(),
            hide_animation: default_sheet_motion(),
        }
    }
}

/// Slider configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SliderConfig {
    /// Discrete stops between the ends of the range, 0 for a continuous slider
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub range_start: f32,
    #[serde(default = "default_range_end")]
    pub range_end: f32,
}

fn default_range_end() -> f32 {
    1.0
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            steps: 0,
            range_start: 0.0,
            range_end: 1.0,
        }
    }
}

impl SliderConfig {
    pub fn new(range_start: f32, range_end: f32) -> Self {
        Self {
            steps: 0,
            range_start,
            range_end,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composables_animation::SpringConfig;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = WidgetsConfig::from_toml("").unwrap();
        assert_eq!(config, WidgetsConfig::default());
        assert_eq!(config.sheet.positional_threshold, 56.0);
        assert_eq!(config.sheet.velocity_threshold, 125.0);
        assert_eq!(
            config.sheet.show_animation,
            AnimationSpec::tween(300, Easing::FastOutSlowIn)
        );
        assert_eq!(config.slider.range_end, 1.0);
    }

    #[test]
    fn test_partial_file() {
        let config = WidgetsConfig::from_toml(
            r#"
            [sheet]
            skip_hidden_state = true

            [sheet.animation]
            type = "spring"
            stiffness = 800.0
            damping = 40.0
            mass = 1.0

            [sheet.hide_animation]
            type = "snap"

            [slider]
            steps = 4
            range_end = 100.0
            "#,
        )
        .unwrap();

        assert!(config.sheet.skip_hidden_state);
        assert!(!config.sheet.skip_partially_expanded);
        assert_eq!(
            config.sheet.animation,
            AnimationSpec::spring(SpringConfig::new(800.0, 40.0, 1.0))
        );
        assert_eq!(config.sheet.hide_animation, AnimationSpec::Snap);
        assert_eq!(config.sheet.show_animation, default_sheet_motion());
        assert_eq!(config.slider, SliderConfig::new(0.0, 100.0).with_steps(4));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = WidgetsConfig::default();
        config.sheet.skip_partially_expanded = true;
        config.sheet.hide_animation = AnimationSpec::tween(150, Easing::FastOutLinearIn);
        config.slider = SliderConfig::new(-1.0, 1.0).with_steps(9);

        let text = config.to_toml().unwrap();
        assert_eq!(WidgetsConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let err = WidgetsConfig::from_toml("[sheet]\npositional_threshold = \"far\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WidgetsConfig::load(Path::new("/nonexistent/widgets.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
