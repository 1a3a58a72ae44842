//! # BrakeKit Core
//!
//! Core types and utilities for BrakeKit.
//! Provides the bend plan data model (steps, material, convention),
//! 2D points, unit formatting and plan validation errors.

pub mod data;
pub mod error;
pub mod geometry;
pub mod units;

pub use data::{
    BendConvention, BendDirection, BendPlan, BendStep, DeductionStrategy, LengthReference,
    MaterialSpec, TrailingAngle, STRAIGHT_ANGLE,
};

pub use error::{PlanError, Result};

pub use geometry::Point;

pub use units::MeasurementSystem;
