//! Input settings with TOML persistence.
//!
//! Follows a fail-safe approach: a missing or corrupted config file degrades
//! to defaults with a warning instead of preventing startup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::gamepad::{DEFAULT_AXIS_THRESHOLD, DEFAULT_DEAD_ZONE};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Tunables for gamepad event synthesis.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct InputSettings {
    /// Dead zone reported to subscribers with axis facts. Never applied to
    /// the raw values.
    pub dead_zone: f32,

    /// Minimum per-axis delta between polls for stick motion to count.
    pub axis_threshold: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
        }
    }
}

impl InputSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(ConfigError::InvalidSetting(format!(
                "dead_zone must be in [0, 1), got {}",
                self.dead_zone
            )));
        }
        if self.axis_threshold <= 0.0 {
            return Err(ConfigError::InvalidSetting(format!(
                "axis_threshold must be positive, got {}",
                self.axis_threshold
            )));
        }
        Ok(())
    }

    /// Loads and validates settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from the platform config dir, falling back to defaults
    /// on any failure.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => {
                debug!("Loaded input settings from {:?}: {:?}", path, settings);
                settings
            }
            Err(e) => {
                warn!("Falling back to default input settings: {}", e);
                Self::default()
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("canvas-input").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = InputSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.dead_zone, 0.3);
        assert_eq!(settings.axis_threshold, 0.1);
    }

    #[test]
    fn rejects_out_of_range_dead_zone() {
        let settings = InputSettings {
            dead_zone: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidSetting(_))
        ));
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let settings = InputSettings {
            axis_threshold: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let settings: InputSettings = toml::from_str("dead_zone = 0.25").unwrap();
        assert_eq!(settings.dead_zone, 0.25);
        assert_eq!(settings.axis_threshold, DEFAULT_AXIS_THRESHOLD);
    }
}
