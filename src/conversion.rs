//! Point <-> weight conversion
//!
//! The forward map blends per-pole angular proximity with a uniform baseline,
//! using the normalized distance from the center as the mix factor. Close to
//! the center the reading is pinned to the exact balanced triple.

use crate::geometry::{angular_difference, point_to_angle, point_to_distance};
use crate::types::{CircleConfig, Dimension, MatchWeights, Point};
use tracing::trace;

/// Below this normalized distance the reading is exactly `MatchWeights::BALANCED`
pub const CENTER_FLOOR_DISTANCE: f64 = 0.05;

const UNIFORM_SHARE: f64 = 1.0 / 3.0;

/// Proximity of `angle` to a pole angle in [0, 1] with quadratic falloff
pub fn pole_proximity(angle: f64, pole_angle: f64) -> f64 {
    let normalized_diff = angular_difference(angle, pole_angle) / 180.0;
    (1.0 - normalized_diff).powi(2)
}

/// Convert an (angle, normalized distance) pair into weights summing to 100
pub fn polar_to_weights(angle: f64, distance: f64) -> MatchWeights {
    if distance < CENTER_FLOOR_DISTANCE {
        return MatchWeights::BALANCED;
    }

    let blended = Dimension::ALL.map(|d| {
        let raw = pole_proximity(angle, d.pole_angle());
        raw * distance + UNIFORM_SHARE * (1.0 - distance)
    });
    let sum: f64 = blended.iter().sum();

    let skills = (blended[0] / sum * 100.0).round().clamp(0.0, 100.0) as u8;
    let compensation = ((blended[1] / sum * 100.0).round().clamp(0.0, 100.0) as u8).min(100 - skills);
    // culture absorbs the rounding remainder
    let culture = 100 - skills - compensation;

    let weights = MatchWeights::new(skills, compensation, culture);
    trace!(angle, distance, %weights, "polar converted to weights");
    weights
}

/// Weights for a point; callers should clamp the point to the disk first
pub fn point_to_weights(circle: &CircleConfig, p: Point) -> MatchWeights {
    polar_to_weights(point_to_angle(circle, p), point_to_distance(circle, p))
}

/// Weighted centroid of the three poles, used to draw the current weights
pub fn weights_to_position(circle: &CircleConfig, weights: MatchWeights) -> Point {
    let Some(fractions) = weights.fractions() else {
        return circle.center;
    };

    let position = circle
        .poles()
        .iter()
        .zip(fractions)
        .fold(Point::new(0.0, 0.0), |acc, (pole, f)| Point {
            x: acc.x + pole.position.x * f,
            y: acc.y + pole.position.y * f,
        });
    trace!(%weights, x = position.x, y = position.y, "weights converted to position");
    position
}
