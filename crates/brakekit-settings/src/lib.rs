//! BrakeKit Settings Crate
//!
//! Handles the engine configuration file (bend convention, default material,
//! simulation pacing, display preferences) and bend plan files.

pub mod config;
pub mod error;
pub mod plan_file;

pub use config::{default_config_path, Config, DisplaySettings, SimulationSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use plan_file::load_plan;
