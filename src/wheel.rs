//! Stateless facade bundling the circle, magnet and keyboard settings

use serde::Serialize;
use tracing::debug;

use crate::config::WheelConfig;
use crate::conversion::{point_to_weights, weights_to_position};
use crate::geometry::clamp_to_circle;
use crate::keyboard::{shift_weight, KeyboardConfig, Nudge};
use crate::magnetic::{apply_magnetic_pull, apply_magnetic_snap, MagnetConfig};
use crate::types::*;

/// Pointer phase as tracked by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Pointer down
    Start,
    Move,
    /// Pointer up; finalizes the position with a hard snap
    End,
}

/// Where to draw the puck and what it reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PuckUpdate {
    pub position: Point,
    pub weights: MatchWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wheel {
    pub circle: CircleConfig,
    pub magnet: MagnetConfig,
    pub keyboard: KeyboardConfig,
}

impl Wheel {
    /// Standard 300x300 wheel with default magnet and keyboard settings
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn from_config(config: &WheelConfig) -> Self {
        Self {
            circle: config.circle,
            magnet: config.magnet,
            keyboard: config.keyboard,
        }
    }

    pub fn poles(&self) -> [Pole; 3] {
        self.circle.poles()
    }

    pub fn point_to_weights(&self, p: Point) -> MatchWeights {
        point_to_weights(&self.circle, p)
    }

    pub fn weights_to_position(&self, weights: MatchWeights) -> Point {
        weights_to_position(&self.circle, weights)
    }

    pub fn clamp_to_circle(&self, p: Point) -> Point {
        clamp_to_circle(&self.circle, p)
    }

    /// Soft pull with the configured strength
    pub fn apply_magnetic_pull(&self, p: Point) -> Point {
        self.apply_magnetic_pull_with(p, self.magnet.pull_strength)
    }

    pub fn apply_magnetic_pull_with(&self, p: Point, strength: f64) -> Point {
        apply_magnetic_pull(&self.circle, &self.magnet, p, strength)
    }

    pub fn apply_magnetic_snap(&self, p: Point, is_dragging: bool) -> Point {
        apply_magnetic_snap(&self.circle, &self.magnet, p, is_dragging)
    }

    pub fn shift_weight(&self, weights: MatchWeights, dimension: Dimension, amount: i32) -> MatchWeights {
        shift_weight(weights, dimension, amount)
    }

    /// One key press toward or away from `dimension`
    pub fn nudge(&self, weights: MatchWeights, dimension: Dimension, nudge: Nudge, large: bool) -> MatchWeights {
        shift_weight(weights, dimension, self.keyboard.amount(nudge, large))
    }

    /// Full pointer pipeline: clamp, pull (down/move) or snap (up), convert
    pub fn track(&self, raw: Point, phase: DragPhase) -> PuckUpdate {
        let clamped = self.clamp_to_circle(raw);
        let position = match phase {
            DragPhase::Start | DragPhase::Move => self.apply_magnetic_pull(clamped),
            DragPhase::End => self.apply_magnetic_snap(clamped, false),
        };
        let weights = self.point_to_weights(position);
        debug!(?phase, x = position.x, y = position.y, %weights, "puck tracked");
        PuckUpdate { position, weights }
    }
}
