//! Solid cross-section builder.
//!
//! Traces the sheet as two parallel rails: the reference rail starts at the
//! origin, the offset rail sits one thickness to its left. Straight runs are
//! shortened by the setbacks of the bends on either side, and each bend adds
//! concentric arcs to both rails about a centre on the inside of the turn.
//! The rail on the inside of a bend follows the inner radius, the other the
//! outer radius.

use std::f64::consts::FRAC_PI_2;

use brakekit_core::geometry::bounds;
use brakekit_core::{BendConvention, BendPlan, Point, STRAIGHT_ANGLE};
use serde::Serialize;
use tracing::debug;

use crate::apex::build_apex;
use crate::error::EngineResult;
use crate::setback::{is_singular, setback};
use crate::warnings::GeometryWarning;

const POINT_EPSILON: f64 = 1e-9;

/// Where and how a bend is applied to the reference rail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BendPivot {
    /// Step whose bend this is
    pub step_index: usize,
    /// Reference rail tangent point where the arc starts
    pub x: f64,
    pub y: f64,
    /// Cumulative heading before the bend (radians)
    pub heading: f64,
    /// Common centre of both rail arcs
    pub center: Point,
    /// +1 for a counter-clockwise turn, -1 for clockwise
    pub turn_sign: f64,
    /// Heading change of the bend (radians)
    pub deviation: f64,
}

impl BendPivot {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// True-thickness cross-section of a part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidProfile {
    /// Closed outline: reference rail, offset rail reversed, first point again
    pub polygon: Vec<Point>,
    pub reference_rail: Vec<Point>,
    pub offset_rail: Vec<Point>,
    pub apex: Vec<Point>,
    pub pivots: Vec<BendPivot>,
    pub warnings: Vec<GeometryWarning>,
}

impl SolidProfile {
    /// `(min_x, min_y, max_x, max_y)` of the outline.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        bounds(&self.polygon)
    }

    pub fn is_closed(&self) -> bool {
        match (self.polygon.first(), self.polygon.last()) {
            (Some(first), Some(last)) => self.polygon.len() > 2 && first == last,
            _ => false,
        }
    }
}

/// Builds the solid cross-section, apex polyline and bend pivots of `plan`.
///
/// Only bends that actually turn produce pivots.
pub fn build_solid(plan: &BendPlan, convention: &BendConvention) -> EngineResult<SolidProfile> {
    plan.validate()?;
    convention.validate()?;

    let mut profile = trace_solid(plan, convention);
    profile.pivots.retain(|pivot| pivot.deviation > 0.0);

    debug!(
        "Built solid profile: {} outline points, {} bends, {} warnings",
        profile.polygon.len(),
        profile.pivots.len(),
        profile.warnings.len()
    );

    Ok(profile)
}

/// Traces a validated plan. Every bend slot gets a pivot, including bends
/// currently at 180°, so the aligner can locate a bend before it starts.
pub(crate) fn trace_solid(plan: &BendPlan, convention: &BendConvention) -> SolidProfile {
    let material = &plan.material;
    let thickness = material.thickness;
    let inner = material.inner_radius;
    let outer = material.outer_radius();
    let setback_radius = convention.setback_radius(material);
    let slots = plan.bend_slots(convention.trailing_angle);
    let count = plan.len();

    let mut warnings = Vec::new();

    // setbacks[i + 1] belongs to the bend after step i
    let mut setbacks = vec![0.0; count + 1];
    let mut deviations = vec![0.0; count];
    for index in 0..slots {
        let angle = plan.effective_angle(index, convention.trailing_angle);
        let deviation = (STRAIGHT_ANGLE - angle).to_radians();
        if deviation <= 0.0 {
            continue;
        }
        if is_singular(deviation) {
            warnings.push(GeometryWarning::SingularAngle {
                step_index: index,
                angle,
            });
        }
        deviations[index] = deviation;
        setbacks[index + 1] = setback(setback_radius, deviation);
    }

    let mut heading = 0.0_f64;
    let mut cursor = Point::origin();
    let mut reference_rail = vec![cursor];
    let mut offset_rail = vec![offset_of(cursor, heading, thickness)];
    let mut pivots = Vec::with_capacity(slots);

    for (index, step) in plan.steps.iter().enumerate() {
        let required = setbacks[index] + setbacks[index + 1];
        let mut straight = step.length - required;
        if straight < 0.0 {
            warnings.push(GeometryWarning::SegmentTooShort {
                step_index: index,
                requested: step.length,
                required,
            });
            straight = 0.0;
        }

        cursor = cursor.advance(heading, straight);
        push_distinct(&mut reference_rail, cursor);
        push_distinct(&mut offset_rail, offset_of(cursor, heading, thickness));

        if index >= slots {
            continue;
        }

        let turn_sign = convention.turn_sign(step.direction);
        // The offset rail lies to the left, so it is on the inside of
        // counter-clockwise turns.
        let (reference_radius, offset_radius) = if turn_sign > 0.0 {
            (outer, inner)
        } else {
            (inner, outer)
        };
        let center = cursor.advance(heading + FRAC_PI_2, turn_sign * reference_radius);
        let deviation = deviations[index];

        pivots.push(BendPivot {
            step_index: index,
            x: cursor.x,
            y: cursor.y,
            heading,
            center,
            turn_sign,
            deviation,
        });

        if deviation <= 0.0 {
            continue;
        }

        let start = (cursor.y - center.y).atan2(cursor.x - center.x);
        let segments = convention.arc_segments(deviation);
        for j in 1..=segments {
            let phi = start + turn_sign * deviation * (j as f64 / segments as f64);
            reference_rail.push(center.advance(phi, reference_radius));
            offset_rail.push(center.advance(phi, offset_radius));
        }

        heading += turn_sign * deviation;
        if let Some(&end) = reference_rail.last() {
            cursor = end;
        }
    }

    for warning in &warnings {
        warning.log();
    }

    let mut polygon = Vec::with_capacity(reference_rail.len() + offset_rail.len() + 1);
    polygon.extend_from_slice(&reference_rail);
    polygon.extend(offset_rail.iter().rev().copied());
    polygon.push(reference_rail[0]);

    SolidProfile {
        polygon,
        reference_rail,
        offset_rail,
        apex: build_apex(plan, convention),
        pivots,
        warnings,
    }
}

fn offset_of(point: Point, heading: f64, thickness: f64) -> Point {
    point.advance(heading + FRAC_PI_2, thickness)
}

fn push_distinct(rail: &mut Vec<Point>, point: Point) {
    if rail
        .last()
        .is_none_or(|last| last.distance_to(&point) > POINT_EPSILON)
    {
        rail.push(point);
    }
}
