//! Error types for the engine crate.
//!
//! Geometric boundary cases (short segments, near-closed bends) are not
//! errors; they come back as [`GeometryWarning`](crate::GeometryWarning)s.
//! Errors here mean the input could not be interpreted at all.

use brakekit_core::PlanError;
use thiserror::Error;

/// Errors that can occur during engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The bend plan, material or convention failed validation.
    #[error("Invalid bend plan: {0}")]
    Plan(#[from] PlanError),

    /// A bend was selected that the plan does not have.
    #[error("Bend index {index} out of range: plan has {count} bends")]
    BendIndexOutOfRange { index: usize, count: usize },

    /// Geometry construction reached an inconsistent state.
    #[error("Geometry error: {0}")]
    GeometryError(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
