//! Geometry primitives over the wheel's logical coordinate space

use crate::types::{CircleConfig, Point};
use tracing::debug;

/// Euclidean distance
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Angle of `p` around the center in [0, 360): 0 is straight up, increasing clockwise
pub fn point_to_angle(circle: &CircleConfig, p: Point) -> f64 {
    let dx = p.x - circle.center.x;
    let dy = p.y - circle.center.y;
    // y grows downward, so "up" is -dy
    dx.atan2(-dy).to_degrees().rem_euclid(360.0)
}

/// Distance from the center as a fraction of the radius, capped at 1
pub fn point_to_distance(circle: &CircleConfig, p: Point) -> f64 {
    let normalized = distance(circle.center, p) / circle.radius;
    if normalized > 1.0 {
        debug!(
            x = p.x,
            y = p.y,
            normalized,
            "point outside the circle was not clamped; treating it as on the boundary"
        );
        return 1.0;
    }
    normalized
}

/// Project `p` onto the boundary when it lies outside the disk
pub fn clamp_to_circle(circle: &CircleConfig, p: Point) -> Point {
    let d = distance(circle.center, p);
    if d <= circle.radius {
        return p;
    }
    let scale = circle.radius / d;
    Point {
        x: circle.center.x + (p.x - circle.center.x) * scale,
        y: circle.center.y + (p.y - circle.center.y) * scale,
    }
}

/// Smaller of the two angular distances between `a` and `b`, in [0, 180]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}
