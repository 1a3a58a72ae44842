use std::path::PathBuf;

use brakekit::{
    build_solid, init_logging, load_plan, BendPlan, BendSimulator, Config, FlatLength,
    FlatLengthCalculator, GeometryWarning, PlotTraces,
};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "brakekit", version)]
#[command(about = "Flat length, cross-section and bend frames of a sheet metal part as JSON", long_about = None)]
struct Cli {
    /// Add the animation frames of every bend
    #[arg(long)]
    frames: bool,
    /// Bend plan file (.json or .toml); the stock channel when omitted
    plan: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    version: &'static str,
    flat: &'a FlatLength,
    profile: PlotTraces,
    warnings: &'a [GeometryWarning],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    frames: Vec<Vec<PlotTraces>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging()?;

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            Config::default()
        }
    };

    let plan = match &cli.plan {
        Some(path) => load_plan(path)?,
        None => {
            info!("No plan file given, using the stock channel");
            BendPlan::stock_channel(config.material.clone())
        }
    };

    let flat = FlatLengthCalculator::new(config.convention.clone()).calculate(&plan)?;
    let profile = build_solid(&plan, &config.convention)?;
    let traces = PlotTraces::from_profile(
        &profile,
        &plan,
        config.display.measurement_system,
        config.display.decimals,
    );

    let frames = if cli.frames {
        simulate(&plan, &config)?
    } else {
        Vec::new()
    };

    let report = Report {
        version: brakekit::VERSION,
        flat: &flat,
        profile: traces,
        warnings: &profile.warnings,
        frames,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn simulate(plan: &BendPlan, config: &Config) -> anyhow::Result<Vec<Vec<PlotTraces>>> {
    let mut simulator = BendSimulator::new(plan.clone(), config.convention.clone())?
        .with_duration(config.simulation.bend_duration())
        .with_flip(config.simulation.flip);

    let mut bends = Vec::with_capacity(simulator.bend_count());
    for bend in 0..simulator.bend_count() {
        simulator.select_bend(bend)?;
        let frames = simulator.frames(config.simulation.frames_per_bend)?;
        bends.push(frames.iter().map(PlotTraces::from_frame).collect());
    }
    Ok(bends)
}
