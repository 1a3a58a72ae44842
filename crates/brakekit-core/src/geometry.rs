//! 2D points for profile geometry.

use serde::{Deserialize, Serialize};

/// A point in the bend plane (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves `distance` along `heading` (radians, counter-clockwise from +X).
    pub fn advance(&self, heading: f64, distance: f64) -> Point {
        Point::new(
            self.x + distance * heading.cos(),
            self.y + distance * heading.sin(),
        )
    }

    /// Reflects the point across the horizontal line `y = axis_y`.
    pub fn mirrored_y(&self, axis_y: f64) -> Point {
        Point::new(self.x, 2.0 * axis_y - self.y)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned bounds of a point list as `(min_x, min_y, max_x, max_y)`.
pub fn bounds(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    let init = (first.x, first.y, first.x, first.y);
    Some(points.iter().fold(init, |(min_x, min_y, max_x, max_y), p| {
        (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_advance_along_heading() {
        let p = Point::origin().advance(FRAC_PI_2, 10.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_mirror_and_midpoint() {
        let p = Point::new(3.0, 1.0);
        assert_eq!(p.mirrored_y(2.0), Point::new(3.0, 3.0));
        assert_eq!(p.midpoint(&Point::new(5.0, 3.0)), Point::new(4.0, 2.0));
    }

    #[test]
    fn test_bounds() {
        assert!(bounds(&[]).is_none());
        let pts = [
            Point::new(0.0, 2.0),
            Point::new(-1.0, 5.0),
            Point::new(4.0, -3.0),
        ];
        assert_eq!(bounds(&pts), Some((-1.0, -3.0, 4.0, 5.0)));
    }
}
