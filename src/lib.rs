//! # BrakeKit
//!
//! A Rust press-brake bend profile engine with support for:
//! - Flat pattern lengths with pluggable bend deductions
//! - True-thickness sheet cross-sections with radius arcs
//! - Per-frame press-brake bend animation
//! - Plot traces and dimension labels for an external plotter
//!
//! ## Architecture
//!
//! BrakeKit is organized as a workspace with multiple crates:
//!
//! 1. **brakekit-core** - Bend plan data model, points, units, validation
//! 2. **brakekit-engine** - Flat length, cross-section, aligner, simulator, plot export
//! 3. **brakekit-settings** - Configuration and plan file handling
//! 4. **brakekit** - Command line binary that integrates all crates

pub use brakekit_core::{
    units, BendConvention, BendDirection, BendPlan, BendStep, DeductionStrategy, LengthReference,
    MaterialSpec, MeasurementSystem, PlanError, Point, TrailingAngle, STRAIGHT_ANGLE,
};

pub use brakekit_engine::{
    align_for_machine, build_apex, build_solid, compute_flat_length, AlignedFrame, BendContext,
    BendDeduction, BendPhase, BendPivot, BendSimulator, DimensionLabel, EngineError,
    EngineResult, FlatLength, FlatLengthCalculator, FlipMode, GeometryWarning, PlotTraces,
    SimulationState, SolidProfile, Trace,
};

pub use brakekit_settings::{
    default_config_path, load_plan, Config, DisplaySettings, SettingsError, SimulationSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log format (`pretty` or `json`)
pub const LOG_FORMAT_ENV: &str = "BRAKEKIT_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for results
/// - RUST_LOG environment variable support
/// - Pretty formatting, or JSON lines when `BRAKEKIT_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let json = std::env::var(LOG_FORMAT_ENV)
        .is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
