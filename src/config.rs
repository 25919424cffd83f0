//! Engine configuration, loadable from JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::keyboard::KeyboardConfig;
use crate::magnetic::MagnetConfig;
use crate::scoring::CategoryWeights;
use crate::types::CircleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub circle: CircleConfig,
    pub magnet: MagnetConfig,
    pub keyboard: KeyboardConfig,
    pub scoring: CategoryWeights,
}

impl WheelConfig {
    /// Parse and validate a JSON document. Missing sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WheelConfig =
            serde_json::from_str(json).context("failed to parse wheel configuration")?;
        config
            .validate()
            .context("wheel configuration rejected")?;
        Ok(config)
    }

    pub fn validate(&self) -> WheelResult<()> {
        if !(self.circle.radius.is_finite() && self.circle.radius > 0.0) {
            return Err(invalid(format!(
                "circle radius must be positive, got {}",
                self.circle.radius
            )));
        }

        let magnet = &self.magnet;
        if !(magnet.center_snap_radius > 0.0 && magnet.center_snap_radius < magnet.pole_snap_radius) {
            return Err(invalid(format!(
                "snap radii must satisfy 0 < center ({}) < pole ({})",
                magnet.center_snap_radius, magnet.pole_snap_radius
            )));
        }
        if !(0.0..=1.0).contains(&magnet.pull_strength) {
            return Err(invalid(format!(
                "pull strength must be within [0, 1], got {}",
                magnet.pull_strength
            )));
        }

        for step in [self.keyboard.step, self.keyboard.large_step] {
            if !(1..=100).contains(&step) {
                return Err(invalid(format!("keyboard step must be within 1..=100, got {step}")));
            }
        }

        self.scoring.validate()
    }
}

fn invalid(message: String) -> WheelError {
    WheelError::InvalidConfig(message)
}
