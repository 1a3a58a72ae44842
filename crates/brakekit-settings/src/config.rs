//! Configuration and settings management for BrakeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Bend convention (deduction strategy, length reference, sign rules)
//! - Default material for new plans
//! - Simulation pacing
//! - Display preferences for labels

pub use brakekit_core::units::MeasurementSystem;
use brakekit_core::{BendConvention, MaterialSpec};
pub use brakekit_engine::FlipMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Largest number of frames rendered per bend
pub const MAX_FRAMES_PER_BEND: usize = 10_000;

/// Largest number of decimals shown in labels
pub const MAX_DECIMALS: usize = 6;

/// Animation pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Frames rendered while one bend closes
    pub frames_per_bend: usize,
    /// Delay between frames in milliseconds
    pub frame_interval_ms: u64,
    /// Whether to turn the sheet over before a bend
    pub flip: FlipMode,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            frames_per_bend: 20,
            frame_interval_ms: 50,
            flip: FlipMode::Auto,
        }
    }
}

impl SimulationSettings {
    /// Seconds one bend takes at this pacing
    pub fn bend_duration(&self) -> f64 {
        self.frames_per_bend as f64 * self.frame_interval_ms as f64 / 1000.0
    }
}

/// Label formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Units for dimension labels
    pub measurement_system: MeasurementSystem,
    /// Digits after the decimal point
    pub decimals: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Metric,
            decimals: 1,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Bend convention
    pub convention: BendConvention,
    /// Material for new plans
    pub material: MaterialSpec,
    /// Simulation pacing
    pub simulation: SimulationSettings,
    /// Label preferences
    pub display: DisplaySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load the config at the default path, or defaults if there is none yet
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.convention.validate()?;
        self.material.validate()?;

        if !(2..=MAX_FRAMES_PER_BEND).contains(&self.simulation.frames_per_bend) {
            return Err(out_of_range(
                "simulation.frames_per_bend",
                self.simulation.frames_per_bend,
            ));
        }

        if self.simulation.frame_interval_ms == 0 {
            return Err(out_of_range(
                "simulation.frame_interval_ms",
                self.simulation.frame_interval_ms,
            ));
        }

        if self.display.decimals > MAX_DECIMALS {
            return Err(out_of_range("display.decimals", self.display.decimals));
        }

        Ok(())
    }
}

/// Path of the config file in the platform configuration directory
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::UnsupportedPlatform("no configuration directory".to_string())
    })?;
    Ok(dir.join("brakekit").join("config.toml"))
}

/// File formats recognised by extension
pub(crate) enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub(crate) fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn out_of_range(key: &str, value: impl ToString) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}
