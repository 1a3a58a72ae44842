//! Bend conventions
//!
//! Shops disagree on how a bend plan is read: which face the lengths are
//! measured on, which way "up" turns, whether the last step's angle counts,
//! and how much material a bend consumes. [`BendConvention`] gathers these
//! choices so one engine serves all of them.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use super::bend::BendDirection;
use super::materials::MaterialSpec;
use crate::error::{PlanError, Result};

/// Default multiplier of the linear deduction (thickness per 90° of bend)
pub const DEFAULT_LINEAR_COEFFICIENT: f64 = 1.0;

/// Default neutral-axis position for the K-factor strategy
pub const DEFAULT_K_FACTOR: f64 = 0.35;

/// Default arc points per 90° of bend
pub const DEFAULT_ARC_RESOLUTION: f64 = 12.0;

/// Upper bound on arc points per 90° of bend
pub const MAX_ARC_RESOLUTION: f64 = 360.0;

/// How much length a bend removes from the sum of the flange lengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeductionStrategy {
    /// `coefficient * thickness * deviation / 90°`
    Linear { coefficient: f64 },
    /// `2 * thickness * tan(deviation / 2)`
    Tangent,
    /// Setback-based deduction with bend allowance `deviation * (r + k * t)`
    KFactor { k_factor: f64 },
}

impl Default for DeductionStrategy {
    fn default() -> Self {
        Self::Linear {
            coefficient: DEFAULT_LINEAR_COEFFICIENT,
        }
    }
}

impl DeductionStrategy {
    /// Returns the name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            DeductionStrategy::Linear { .. } => "Linear",
            DeductionStrategy::Tangent => "Tangent",
            DeductionStrategy::KFactor { .. } => "K-Factor",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            DeductionStrategy::Linear { coefficient } => {
                if !coefficient.is_finite() || coefficient < 0.0 {
                    return Err(PlanError::InvalidConvention {
                        name: "coefficient".to_string(),
                        reason: format!("must be a non-negative number, got {}", coefficient),
                    });
                }
            }
            DeductionStrategy::KFactor { k_factor } => {
                if !(0.0..=1.0).contains(&k_factor) {
                    return Err(PlanError::InvalidConvention {
                        name: "k_factor".to_string(),
                        reason: format!("must lie in 0..1, got {}", k_factor),
                    });
                }
            }
            DeductionStrategy::Tangent => {}
        }
        Ok(())
    }
}

/// Face on which segment lengths are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthReference {
    /// Outside dimensions, to the outer mold line
    #[default]
    Outer,
    /// Inside dimensions, to the inner mold line
    Inner,
}

/// Whether the last step's angle is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingAngle {
    /// The last step is a terminal straight run whatever angle it holds
    #[default]
    Ignored,
    /// The last step's bend is formed at the end of the part
    Active,
}

/// How a bend plan is interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BendConvention {
    pub deduction: DeductionStrategy,
    pub length_reference: LengthReference,
    /// `Up` bends turn the heading counter-clockwise when true
    pub up_is_positive_heading: bool,
    pub trailing_angle: TrailingAngle,
    /// Arc points generated per 90° of bend
    pub arc_resolution: f64,
}

impl Default for BendConvention {
    fn default() -> Self {
        Self {
            deduction: DeductionStrategy::default(),
            length_reference: LengthReference::Outer,
            up_is_positive_heading: true,
            trailing_angle: TrailingAngle::Ignored,
            arc_resolution: DEFAULT_ARC_RESOLUTION,
        }
    }
}

impl BendConvention {
    pub fn with_deduction(mut self, deduction: DeductionStrategy) -> Self {
        self.deduction = deduction;
        self
    }

    pub fn with_trailing_angle(mut self, trailing_angle: TrailingAngle) -> Self {
        self.trailing_angle = trailing_angle;
        self
    }

    pub fn with_length_reference(mut self, length_reference: LengthReference) -> Self {
        self.length_reference = length_reference;
        self
    }

    /// +1 for a counter-clockwise turn, -1 for clockwise.
    pub fn turn_sign(&self, direction: BendDirection) -> f64 {
        let up = if self.up_is_positive_heading { 1.0 } else { -1.0 };
        match direction {
            BendDirection::Up => up,
            BendDirection::Down => -up,
        }
    }

    /// Radius whose tangent points bound the straight runs.
    pub fn setback_radius(&self, material: &MaterialSpec) -> f64 {
        match self.length_reference {
            LengthReference::Outer => material.outer_radius(),
            LengthReference::Inner => material.inner_radius,
        }
    }

    /// Number of arc segments for a bend of `deviation` radians.
    pub fn arc_segments(&self, deviation: f64) -> usize {
        let segments = (self.arc_resolution * (deviation.abs() / FRAC_PI_2) - 1e-9).ceil();
        (segments as usize).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        self.deduction.validate()?;
        if !(self.arc_resolution > 0.0 && self.arc_resolution <= MAX_ARC_RESOLUTION) {
            return Err(PlanError::InvalidConvention {
                name: "arc_resolution".to_string(),
                reason: format!(
                    "must lie in 0..{}, got {}",
                    MAX_ARC_RESOLUTION, self.arc_resolution
                ),
            });
        }
        Ok(())
    }
}
