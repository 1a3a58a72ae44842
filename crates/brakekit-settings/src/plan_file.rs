//! Bend plan files
//!
//! Plans are stored as `.json` or `.toml` documents holding a `steps` array
//! and an optional `material` table.

use brakekit_core::BendPlan;
use std::path::Path;
use tracing::info;

use crate::config::FileFormat;
use crate::error::SettingsResult;

/// Read and validate a bend plan from a `.json` or `.toml` file
pub fn load_plan(path: &Path) -> SettingsResult<BendPlan> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    let plan: BendPlan = match format {
        FileFormat::Json => serde_json::from_str(&content)?,
        FileFormat::Toml => toml::from_str(&content)?,
    };
    plan.validate()?;

    info!("Loaded {} steps from {}", plan.len(), path.display());
    Ok(plan)
}
