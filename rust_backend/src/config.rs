//! Engine configuration file support.
//!
//! This module provides utilities for reading engine settings from TOML
//! configuration files. Every field has a default, so an empty file (or no
//! file at all, via [`EngineConfig::default`]) yields the standard rules:
//! business hours 09:00-17:00, night hours 20:00-06:00, a 24 hour DST
//! lookahead and a 1° terminator sampling step.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{EngineError, EngineResult};

/// Upper bound for `dst_lookahead_hours`: one leap year.
pub const MAX_DST_LOOKAHEAD_HOURS: i64 = 24 * 366;

/// Engine configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub classification: ClassificationSettings,
    #[serde(default)]
    pub terminator: TerminatorSettings,
    #[serde(default)]
    pub color: ColorSettings,
}

/// Local-time classification windows.
///
/// Hours are local wall-clock hours in `[0, 24)`. The business window is
/// `[business_start_hour, business_end_hour)`; the night window wraps past
/// midnight: `[night_start_hour, 24) ∪ [0, night_end_hour)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSettings {
    #[serde(default = "default_business_start")]
    pub business_start_hour: u32,
    #[serde(default = "default_business_end")]
    pub business_end_hour: u32,
    #[serde(default = "default_night_start")]
    pub night_start_hour: u32,
    #[serde(default = "default_night_end")]
    pub night_end_hour: u32,
    #[serde(default = "default_dst_lookahead")]
    pub dst_lookahead_hours: i64,
}

/// Terminator sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminatorSettings {
    #[serde(default = "default_longitude_step")]
    pub longitude_step_deg: f64,
}

/// How region colors are derived from identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorStrategy {
    /// Pick an entry of the fixed 20-color palette.
    #[default]
    Palette,
    /// Derive a hue in `[0, 360)`; saturation and lightness come from settings.
    Hue,
}

/// Color assignment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    #[serde(default)]
    pub strategy: ColorStrategy,
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    #[serde(default = "default_lightness")]
    pub lightness: f64,
}

fn default_business_start() -> u32 {
    9
}

fn default_business_end() -> u32 {
    17
}

fn default_night_start() -> u32 {
    20
}

fn default_night_end() -> u32 {
    6
}

fn default_dst_lookahead() -> i64 {
    24
}

fn default_longitude_step() -> f64 {
    1.0
}

fn default_saturation() -> f64 {
    0.65
}

fn default_lightness() -> f64 {
    0.55
}

impl Default for ClassificationSettings {
    fn default() -> Self {
        Self {
            business_start_hour: default_business_start(),
            business_end_hour: default_business_end(),
            night_start_hour: default_night_start(),
            night_end_hour: default_night_end(),
            dst_lookahead_hours: default_dst_lookahead(),
        }
    }
}

impl Default for TerminatorSettings {
    fn default() -> Self {
        Self {
            longitude_step_deg: default_longitude_step(),
        }
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            strategy: ColorStrategy::default(),
            saturation: default_saturation(),
            lightness: default_lightness(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if the file was read, parsed and validated
    /// * `Err(EngineError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzgeo_rust::config::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("[classification]\nbusiness_end_hour = 18\n").unwrap();
    /// assert_eq!(config.classification.business_start_hour, 9);
    /// assert_eq!(config.classification.business_end_hour, 18);
    /// ```
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(content).map_err(|e| {
            EngineError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `tzgeo.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if found and parsed successfully
    /// * `Err(EngineError::Configuration)` if no config file found or parse error
    pub fn from_default_location() -> EngineResult<Self> {
        let search_paths = [
            PathBuf::from("tzgeo.toml"),
            PathBuf::from("rust_backend/tzgeo.toml"),
            PathBuf::from("../tzgeo.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading engine configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(EngineError::Configuration(
            "No tzgeo.toml found in standard locations".to_string(),
        ))
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        let c = &self.classification;
        for (name, hour) in [
            ("business_start_hour", c.business_start_hour),
            ("business_end_hour", c.business_end_hour),
            ("night_start_hour", c.night_start_hour),
            ("night_end_hour", c.night_end_hour),
        ] {
            if hour >= 24 {
                return Err(EngineError::Configuration(format!(
                    "classification.{} must be in 0..24, got {}",
                    name, hour
                )));
            }
        }

        if c.business_start_hour >= c.business_end_hour {
            return Err(EngineError::Configuration(format!(
                "classification.business_start_hour ({}) must be before business_end_hour ({})",
                c.business_start_hour, c.business_end_hour
            )));
        }

        if !(1..=MAX_DST_LOOKAHEAD_HOURS).contains(&c.dst_lookahead_hours) {
            return Err(EngineError::Configuration(format!(
                "classification.dst_lookahead_hours must be in 1..={}, got {}",
                MAX_DST_LOOKAHEAD_HOURS,
                c.dst_lookahead_hours
            )));
        }

        let step = self.terminator.longitude_step_deg;
        if !(step > 0.0 && step <= 90.0) {
            return Err(EngineError::Configuration(format!(
                "terminator.longitude_step_deg must be in (0, 90], got {}",
                step
            )));
        }

        for (name, value) in [
            ("saturation", self.color.saturation),
            ("lightness", self.color.lightness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::Configuration(format!(
                    "color.{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
