//! Style configuration shared by every control in a tree.

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed inset added to a measured decoration width, in pixels.
pub const DEFAULT_GUTTER_PX: u32 = 16;

const MAX_GUTTER_PX: u32 = 64;

#[derive(Debug, Error)]
/// Errors raised while loading a [`StyleConfig`].
pub enum ConfigError {
    /// The payload is not valid JSON for the config shape.
    #[error("style config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The gutter is zero or unreasonably large.
    #[error("gutter_px must be between 1 and 64, got {0}")]
    GutterOutOfRange(u32),
    /// The group gap class is empty.
    #[error("group_gap_class must not be empty")]
    EmptyGroupGap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for slot padding, group spacing, and the loading indicator.
pub struct StyleConfig {
    /// Inset added to measured decoration widths.
    pub gutter_px: u32,
    /// Gap class between unattached group children and around group prefix/suffix.
    pub group_gap_class: String,
    /// Edge length of the default loading spinner.
    pub spinner_size_px: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            gutter_px: DEFAULT_GUTTER_PX,
            group_gap_class: "gap-1.5".to_string(),
            spinner_size_px: 15,
        }
    }
}

impl StyleConfig {
    /// Parses and validates a JSON config; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation variants for values
    /// outside their accepted range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks semantic constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GUTTER_PX).contains(&self.gutter_px) {
            return Err(ConfigError::GutterOutOfRange(self.gutter_px));
        }
        if self.group_gap_class.trim().is_empty() {
            return Err(ConfigError::EmptyGroupGap);
        }
        Ok(())
    }
}

/// Makes `config` available to descendant controls.
///
/// Invalid configs are rejected with a warning and the defaults are provided instead.
pub fn provide_style_config(config: StyleConfig) {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            logging::warn!("style config rejected: {err}");
            StyleConfig::default()
        }
    };
    provide_context(config);
}

/// Reads the nearest provided [`StyleConfig`], or the defaults when none was provided.
pub fn use_style_config() -> StyleConfig {
    use_context::<StyleConfig>().unwrap_or_default()
}
