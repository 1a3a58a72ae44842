//! Data models for bend plans
//!
//! This module provides:
//! - Bend steps (segment length, included angle, direction)
//! - Material specification (thickness, inner radius) and presets
//! - Bend conventions (deduction strategy, length reference, sign rules)

pub mod bend;
pub mod convention;
pub mod materials;

pub use bend::{BendDirection, BendPlan, BendStep, STRAIGHT_ANGLE};
pub use convention::{BendConvention, DeductionStrategy, LengthReference, TrailingAngle};
pub use materials::MaterialSpec;
