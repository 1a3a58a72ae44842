//! Apex polyline: the zero-thickness mold-line path of a part.

use brakekit_core::{BendConvention, BendPlan, Point, STRAIGHT_ANGLE};

/// Builds the apex polyline of `plan`: one point per segment end, starting
/// at the origin heading along +X, turning by the signed deviation after
/// each formed bend.
pub fn build_apex(plan: &BendPlan, convention: &BendConvention) -> Vec<Point> {
    let mut points = Vec::with_capacity(plan.len() + 1);
    let mut cursor = Point::origin();
    let mut heading = 0.0_f64;
    points.push(cursor);

    for (index, step) in plan.steps.iter().enumerate() {
        cursor = cursor.advance(heading, step.length);
        points.push(cursor);

        let angle = plan.effective_angle(index, convention.trailing_angle);
        let deviation = (STRAIGHT_ANGLE - angle).to_radians();
        heading += convention.turn_sign(step.direction) * deviation;
    }

    points
}
