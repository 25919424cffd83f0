//! Magnetic behavior: soft pull while dragging, hard snap on release

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::distance;
use crate::types::{CircleConfig, Point};

pub const CENTER_SNAP_RADIUS: f64 = 15.0;
pub const POLE_SNAP_RADIUS: f64 = 20.0;
pub const DEFAULT_PULL_STRENGTH: f64 = 0.15;

/// Snap radii and pull strength, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnetConfig {
    pub center_snap_radius: f64,
    pub pole_snap_radius: f64,
    pub pull_strength: f64,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            center_snap_radius: CENTER_SNAP_RADIUS,
            pole_snap_radius: POLE_SNAP_RADIUS,
            pull_strength: DEFAULT_PULL_STRENGTH,
        }
    }
}

/// Hard snap to the center or a pole.
///
/// While a drag is still in progress both radii are halved.
pub fn apply_magnetic_snap(
    circle: &CircleConfig,
    magnet: &MagnetConfig,
    p: Point,
    is_dragging: bool,
) -> Point {
    let factor = if is_dragging { 0.5 } else { 1.0 };
    let center_radius = magnet.center_snap_radius * factor;
    let pole_radius = magnet.pole_snap_radius * factor;

    if distance(p, circle.center) <= center_radius {
        debug!(is_dragging, "snapped to center");
        return circle.center;
    }

    for pole in circle.poles() {
        if distance(p, pole.position) <= pole_radius {
            debug!(pole = %pole.dimension, is_dragging, "snapped to pole");
            return pole.position;
        }
    }

    p
}

/// Soft pull toward the first target whose attraction radius contains `p`.
///
/// Attraction radii are twice the snap radii. The pull is scaled by
/// `1 - distance / radius`, so points nearer the target move further.
pub fn apply_magnetic_pull(
    circle: &CircleConfig,
    magnet: &MagnetConfig,
    p: Point,
    strength: f64,
) -> Point {
    let center_target = (circle.center, magnet.center_snap_radius * 2.0);
    let pole_targets = circle
        .poles()
        .map(|pole| (pole.position, magnet.pole_snap_radius * 2.0));

    for (target, radius) in std::iter::once(center_target).chain(pole_targets) {
        let d = distance(p, target);
        if d > 0.0 && d < radius {
            let pull = strength * (1.0 - d / radius);
            debug!(distance = d, pull, "magnetic pull applied");
            return Point {
                x: p.x + (target.x - p.x) * pull,
                y: p.y + (target.y - p.y) * pull,
            };
        }
    }

    p
}
