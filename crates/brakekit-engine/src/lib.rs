//! # BrakeKit Engine
//!
//! This crate turns a bend plan into the geometry a press-brake preview
//! needs. Every entry point is a pure function of its inputs; nothing is
//! cached between calls, so a UI can recompute on every interaction.
//!
//! ## Components
//!
//! - **Flat Length**: unbent length with pluggable bend deduction strategies
//! - **Apex**: idealized zero-thickness mold-line polyline
//! - **Solid**: true-thickness cross-section polygon with radius arcs and
//!   per-bend pivots
//! - **Aligner**: places a partially bent part under the punch for one
//!   animation frame
//! - **Simulation**: externally clocked ticker over the aligner
//! - **Plot**: coordinate traces and dimension labels for a plotting front end
//!
//! ## Data Flow
//!
//! ```text
//! BendPlan ──┬── FlatLengthCalculator ──> FlatLength
//!            └── build_solid ──> SolidProfile ──> PlotTraces
//!                    │
//!                    └── align_for_machine (per frame) ──> AlignedFrame
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use brakekit_core::{BendConvention, BendPlan, BendStep, MaterialSpec};
//! use brakekit_engine::{build_solid, compute_flat_length};
//!
//! let steps = vec![BendStep::up(100.0, 90.0), BendStep::straight(100.0)];
//! let flat = compute_flat_length(&steps, 2.0);
//! assert!((flat.flat_length - 198.0).abs() < 1e-9);
//!
//! let plan = BendPlan::new(steps, MaterialSpec::new(2.0, 1.0));
//! let profile = build_solid(&plan, &BendConvention::default()).unwrap();
//! assert_eq!(profile.pivots.len(), 1);
//! ```

pub mod aligner;
pub mod apex;
pub mod error;
pub mod flat_length;
pub mod plot;
pub mod setback;
pub mod simulation;
pub mod solid;
pub mod warnings;

pub use aligner::{align_for_machine, AlignedFrame, BendPhase, FlipMode};
pub use apex::build_apex;
pub use error::{EngineError, EngineResult};
pub use flat_length::{compute_flat_length, BendContext, BendDeduction, FlatLength, FlatLengthCalculator};
pub use plot::{DimensionLabel, PlotTraces, Trace};
pub use simulation::{BendSimulator, SimulationState};
pub use solid::{build_solid, BendPivot, SolidProfile};
pub use warnings::GeometryWarning;
