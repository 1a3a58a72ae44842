//! Bend steps and plans
//!
//! A part is an ordered list of [`BendStep`]s. Step `i` is segment `i`
//! followed by bend `i`; whether the final step's angle is formed is decided
//! by [`TrailingAngle`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::convention::TrailingAngle;
use super::materials::MaterialSpec;
use crate::error::{PlanError, Result};

/// Included angle of an unbent (straight) continuation, in degrees
pub const STRAIGHT_ANGLE: f64 = 180.0;

/// Side the flange curls toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BendDirection {
    /// Flange curls toward the punch (concave up)
    #[default]
    Up,
    /// Flange curls away from the punch (concave down)
    Down,
}

impl BendDirection {
    /// Returns the name of the direction.
    pub fn name(&self) -> &'static str {
        match self {
            BendDirection::Up => "Up",
            BendDirection::Down => "Down",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            BendDirection::Up => BendDirection::Down,
            BendDirection::Down => BendDirection::Up,
        }
    }
}

impl fmt::Display for BendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One segment followed by one bend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendStep {
    /// Segment length (mm)
    pub length: f64,
    /// Included machine angle (degrees); 180 is straight, 90 a right angle
    pub angle: f64,
    /// Curl direction; ignored when `angle` is 180
    #[serde(default)]
    pub direction: BendDirection,
}

impl BendStep {
    pub fn new(length: f64, angle: f64, direction: BendDirection) -> Self {
        Self {
            length,
            angle,
            direction,
        }
    }

    /// A segment with no bend after it.
    pub fn straight(length: f64) -> Self {
        Self::new(length, STRAIGHT_ANGLE, BendDirection::Up)
    }

    pub fn up(length: f64, angle: f64) -> Self {
        Self::new(length, angle, BendDirection::Up)
    }

    pub fn down(length: f64, angle: f64) -> Self {
        Self::new(length, angle, BendDirection::Down)
    }

    /// Heading change produced by this bend, in degrees.
    pub fn deviation_degrees(&self) -> f64 {
        STRAIGHT_ANGLE - self.angle
    }

    /// Heading change produced by this bend, in radians.
    pub fn deviation(&self) -> f64 {
        self.deviation_degrees().to_radians()
    }

    pub fn is_bend(&self) -> bool {
        self.angle < STRAIGHT_ANGLE
    }

    pub fn with_angle(&self, angle: f64) -> Self {
        Self { angle, ..*self }
    }
}

/// An immutable part definition: steps plus material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendPlan {
    pub steps: Vec<BendStep>,
    #[serde(default)]
    pub material: MaterialSpec,
}

impl BendPlan {
    pub fn new(steps: Vec<BendStep>, material: MaterialSpec) -> Self {
        Self { steps, material }
    }

    /// Two flanges joined by one bend.
    pub fn single_bend(
        left: f64,
        right: f64,
        angle: f64,
        direction: BendDirection,
        material: MaterialSpec,
    ) -> Self {
        Self::new(
            vec![
                BendStep::new(left, angle, direction),
                BendStep::straight(right),
            ],
            material,
        )
    }

    /// Default profile offered when no part has been entered yet: a channel
    /// with an opened return flange.
    pub fn stock_channel(material: MaterialSpec) -> Self {
        Self::new(
            vec![
                BendStep::up(50.0, 90.0),
                BendStep::up(100.0, 90.0),
                BendStep::up(50.0, 135.0),
                BendStep::straight(30.0),
            ],
            material,
        )
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of the segment lengths.
    pub fn total_length(&self) -> f64 {
        self.steps.iter().map(|s| s.length).sum()
    }

    /// Number of steps that may carry a bend under `trailing`.
    pub fn bend_slots(&self, trailing: TrailingAngle) -> usize {
        match trailing {
            TrailingAngle::Active => self.steps.len(),
            TrailingAngle::Ignored => self.steps.len().saturating_sub(1),
        }
    }

    /// Included angle actually formed after step `index`.
    pub fn effective_angle(&self, index: usize, trailing: TrailingAngle) -> f64 {
        if index < self.bend_slots(trailing) {
            self.steps[index].angle
        } else {
            STRAIGHT_ANGLE
        }
    }

    /// Step indices of every bend that is formed, in order.
    pub fn bend_step_indices(&self, trailing: TrailingAngle) -> Vec<usize> {
        (0..self.bend_slots(trailing))
            .filter(|&i| self.steps[i].is_bend())
            .collect()
    }

    /// Copy of this plan with the given included angles, one per step.
    pub fn with_angles(&self, angles: &[f64]) -> Self {
        debug_assert_eq!(angles.len(), self.steps.len());
        let steps = self
            .steps
            .iter()
            .zip(angles)
            .map(|(step, &angle)| step.with_angle(angle))
            .collect();
        Self::new(steps, self.material.clone())
    }

    /// Checks every step and the material.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(PlanError::EmptyPlan);
        }

        for (index, step) in self.steps.iter().enumerate() {
            if !step.length.is_finite() || step.length <= 0.0 {
                return Err(PlanError::InvalidLength {
                    index,
                    length: step.length,
                });
            }
            if !step.angle.is_finite() || !(0.0..=STRAIGHT_ANGLE).contains(&step.angle) {
                return Err(PlanError::AngleOutOfRange {
                    index,
                    angle: step.angle,
                });
            }
        }

        self.material.validate()
    }
}
