//! Error handling for BrakeKit plan data
//!
//! Bend plans arrive from the UI layer or from plan files, so every numeric
//! input is checked once before any geometry is built. The engine never
//! raises errors for geometric boundary cases; those are reported as
//! warnings instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Plan validation error type
///
/// Represents a bend plan or material that cannot be turned into geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The plan contains no steps
    #[error("Bend plan has no steps")]
    EmptyPlan,

    /// A segment length is zero, negative or not finite
    #[error("Step {index}: segment length must be positive, got {length}")]
    InvalidLength {
        /// The index of the offending step.
        index: usize,
        /// The rejected length.
        length: f64,
    },

    /// A bend angle lies outside 0..=180 degrees
    #[error("Step {index}: bend angle {angle} outside 0..180 degrees")]
    AngleOutOfRange {
        /// The index of the offending step.
        index: usize,
        /// The rejected angle in degrees.
        angle: f64,
    },

    /// A material dimension is zero, negative or not finite
    #[error("Invalid material {name}: {value}")]
    InvalidMaterial {
        /// The name of the material field.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A convention parameter is unusable
    #[error("Invalid convention parameter '{name}': {reason}")]
    InvalidConvention {
        /// The name of the convention field.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type for plan validation
pub type Result<T> = std::result::Result<T, PlanError>;
