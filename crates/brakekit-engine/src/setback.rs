//! Bend setback.
//!
//! The setback is the distance from a bend's virtual sharp (where the two
//! flange faces would meet) back to the tangent point where the radius
//! starts. It is `r * tan(deviation / 2)`, which diverges as the included
//! angle closes toward 0°.

use std::f64::consts::PI;

/// Included angles below this many degrees are past the tangent formula.
pub const SINGULAR_GUARD_DEGREES: f64 = 1.0;

/// Largest deviation (radians) evaluated with the tangent formula.
pub fn guard_limit() -> f64 {
    PI - SINGULAR_GUARD_DEGREES.to_radians()
}

/// True when `deviation` (radians) is too close to a full U-turn for the
/// tangent formula.
pub fn is_singular(deviation: f64) -> bool {
    deviation > guard_limit()
}

/// Setback of a bend of `deviation` radians measured on a face of `radius`.
///
/// Past the guard the tangent curve is continued along its tangent line at
/// the guard limit, so the setback stays finite, continuous and strictly
/// increasing all the way to a full hem.
pub fn setback(radius: f64, deviation: f64) -> f64 {
    if deviation <= 0.0 {
        0.0
    } else if is_singular(deviation) {
        let limit = guard_limit();
        let half = limit / 2.0;
        let slope = radius / (2.0 * half.cos().powi(2));
        radius * half.tan() + slope * (deviation - limit)
    } else {
        radius * (deviation / 2.0).tan()
    }
}
