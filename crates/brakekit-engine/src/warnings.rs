//! Geometry warnings.
//!
//! The engine recovers locally from degenerate input (a flange too short for
//! its bends, a bend closed almost flat on itself) and reports what it did
//! so the caller can flag the part instead of drawing it silently wrong.

use serde::Serialize;
use std::fmt;

/// A boundary condition the engine recovered from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryWarning {
    /// The segment is shorter than the setbacks of its two bends; its
    /// straight run was clamped to zero.
    SegmentTooShort {
        step_index: usize,
        requested: f64,
        required: f64,
    },
    /// The included angle is too close to 0° for the tangent setback; the
    /// setback was extrapolated from the guard limit.
    SingularAngle { step_index: usize, angle: f64 },
    /// The deductions exceed the total length; the flat length was clamped
    /// to zero.
    NegativeFlatLength { raw: f64 },
    /// The input could not be measured; the flat length was reported as zero.
    InvalidInput { reason: String },
}

impl GeometryWarning {
    /// Emits the warning through `tracing`.
    pub fn log(&self) {
        tracing::warn!("{}", self);
    }
}

impl fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryWarning::SegmentTooShort {
                step_index,
                requested,
                required,
            } => write!(
                f,
                "Step {}: segment length {:.3} mm is shorter than its bend setbacks ({:.3} mm)",
                step_index, requested, required
            ),
            GeometryWarning::SingularAngle { step_index, angle } => write!(
                f,
                "Step {}: included angle {:.3}° is below the tangent setback guard",
                step_index, angle
            ),
            GeometryWarning::NegativeFlatLength { raw } => {
                write!(f, "Flat length {:.3} mm clamped to zero", raw)
            }
            GeometryWarning::InvalidInput { reason } => {
                write!(f, "Flat length not computed: {}", reason)
            }
        }
    }
}
