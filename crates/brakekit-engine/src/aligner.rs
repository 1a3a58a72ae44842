//! Press-brake alignment of a partially bent part.
//!
//! For one animation frame the part is rebuilt with earlier bends formed,
//! the active bend interpolated from straight toward its target and later
//! bends still flat. The result is moved into tool coordinates: the active
//! bend sits on the vertical axis with both flanges symmetric about it, the
//! inside of the bend faces the punch and the die-side face touches `y = 0`.

use brakekit_core::{BendConvention, BendPlan, Point, STRAIGHT_ANGLE};
use nalgebra::{Matrix3, Point2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::solid::{trace_solid, BendPivot};
use crate::warnings::GeometryWarning;

/// Progress of the active bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BendPhase {
    /// Still at 180°
    Straight,
    /// Between 180° and the target angle
    Interpolating,
    /// At the target angle
    Bent,
}

impl BendPhase {
    /// Returns the name of the phase.
    pub fn name(&self) -> &'static str {
        match self {
            BendPhase::Straight => "Straight",
            BendPhase::Interpolating => "Interpolating",
            BendPhase::Bent => "Bent",
        }
    }

    pub fn from_progress(progress: f64) -> Self {
        if progress <= 0.0 {
            BendPhase::Straight
        } else if progress >= 1.0 {
            BendPhase::Bent
        } else {
            BendPhase::Interpolating
        }
    }
}

/// Whether the sheet is turned over before the active bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlipMode {
    /// Flip whenever the bend would otherwise open away from the punch.
    ///
    /// With the default convention (`Up` turns counter-clockwise) this flips
    /// `Down` bends and leaves `Up` bends as they are: the reference rail is
    /// the die-side face, so an `Up` bend already closes toward the punch.
    #[default]
    Auto,
    /// Always flip
    Flip,
    /// Never flip
    NoFlip,
}

/// One frame of the bend animation in tool coordinates.
#[derive(Debug, Clone)]
pub struct AlignedFrame {
    pub polygon: Vec<Point>,
    pub apex: Vec<Point>,
    pub phase: BendPhase,
    /// Index of the active bend among the plan's bends
    pub active_bend: usize,
    pub step_index: usize,
    pub progress: f64,
    /// Included angle of the active bend in this frame (degrees)
    pub current_angle: f64,
    pub target_angle: f64,
    pub flipped: bool,
    /// Rotation applied after the optional mirror (radians)
    pub rotation: f64,
    /// Part-to-tool transform in homogeneous 2D coordinates
    pub transform: Matrix3<f64>,
    pub warnings: Vec<GeometryWarning>,
}

/// Included angles for a frame: bends before `active_bend` formed, the
/// active one interpolated by `progress`, later ones straight.
pub fn interpolated_angles(
    plan: &BendPlan,
    convention: &BendConvention,
    active_bend: usize,
    progress: f64,
) -> Vec<f64> {
    let mut angles: Vec<f64> = plan.steps.iter().map(|s| s.angle).collect();
    for (k, step_index) in plan
        .bend_step_indices(convention.trailing_angle)
        .into_iter()
        .enumerate()
    {
        if k == active_bend {
            let target = plan.steps[step_index].angle;
            angles[step_index] = STRAIGHT_ANGLE + (target - STRAIGHT_ANGLE) * progress;
        } else if k > active_bend {
            angles[step_index] = STRAIGHT_ANGLE;
        }
    }
    angles
}

/// Builds the frame of bend `active_bend` at `progress` (clamped to 0..=1).
///
/// # Panics
///
/// Panics if `active_bend` is not less than the number of bends the plan
/// forms under `convention`.
pub fn align_for_machine(
    plan: &BendPlan,
    convention: &BendConvention,
    active_bend: usize,
    progress: f64,
    flip: FlipMode,
) -> EngineResult<AlignedFrame> {
    plan.validate()?;
    convention.validate()?;

    let bends = plan.bend_step_indices(convention.trailing_angle);
    assert!(
        active_bend < bends.len(),
        "bend index {} out of range: plan has {} bends",
        active_bend,
        bends.len()
    );

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    let step_index = bends[active_bend];
    let target_angle = plan.steps[step_index].angle;
    let angles = interpolated_angles(plan, convention, active_bend, progress);
    let current_angle = angles[step_index];

    let partial = plan.with_angles(&angles);
    let profile = trace_solid(&partial, convention);
    let pivot = profile
        .pivots
        .iter()
        .find(|p| p.step_index == step_index)
        .copied()
        .ok_or_else(|| {
            EngineError::GeometryError(format!("no pivot traced for step {}", step_index))
        })?;

    let flipped = match flip {
        FlipMode::Auto => pivot.turn_sign < 0.0,
        FlipMode::Flip => true,
        FlipMode::NoFlip => false,
    };
    let (transform, rotation) = machine_transform(&pivot, flipped, plan.material.outer_radius());

    debug!(
        "Aligned bend {} (step {}) at {:.0}%: {:.2}° of {:.2}°, flipped={}",
        active_bend,
        step_index,
        progress * 100.0,
        current_angle,
        target_angle,
        flipped
    );

    Ok(AlignedFrame {
        polygon: apply(&transform, &profile.polygon),
        apex: apply(&transform, &profile.apex),
        phase: BendPhase::from_progress(progress),
        active_bend,
        step_index,
        progress,
        current_angle,
        target_angle,
        flipped,
        rotation,
        transform,
        warnings: profile.warnings,
    })
}

/// Part-to-tool transform for `pivot`: move the tangent point to the
/// origin, mirror if flipped, rotate the bend bisector onto the vertical
/// axis, then centre the arc on `x = 0` with its convex face on `y = 0`.
fn machine_transform(pivot: &BendPivot, flipped: bool, outer_radius: f64) -> (Matrix3<f64>, f64) {
    let (heading, turn_sign) = if flipped {
        (-pivot.heading, -pivot.turn_sign)
    } else {
        (pivot.heading, pivot.turn_sign)
    };
    let rotation = -heading - turn_sign * pivot.deviation / 2.0;

    let to_pivot = Matrix3::new_translation(&Vector2::new(-pivot.x, -pivot.y));
    let mirror = if flipped {
        Matrix3::new_nonuniform_scaling(&Vector2::new(1.0, -1.0))
    } else {
        Matrix3::identity()
    };
    let rotate = Matrix3::new_rotation(rotation);
    let placed = rotate * mirror * to_pivot;

    let center = placed.transform_point(&Point2::new(pivot.center.x, pivot.center.y));
    let contact_y = center.y - turn_sign * outer_radius;
    let to_tool = Matrix3::new_translation(&Vector2::new(-center.x, -contact_y));

    (to_tool * placed, rotation)
}

fn apply(transform: &Matrix3<f64>, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            let q = transform.transform_point(&Point2::new(p.x, p.y));
            Point::new(q.x, q.y)
        })
        .collect()
}
