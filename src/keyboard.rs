//! Discrete keyboard adjustment of the weight triple

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{Dimension, MatchWeights};

pub const DEFAULT_STEP: u8 = 5;
pub const DEFAULT_LARGE_STEP: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub step: u8,
    pub large_step: u8,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            large_step: DEFAULT_LARGE_STEP,
        }
    }
}

/// Direction of a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nudge {
    Increase,
    Decrease,
}

impl KeyboardConfig {
    /// Signed amount for one key press
    pub fn amount(&self, nudge: Nudge, large: bool) -> i32 {
        let step = (if large { self.large_step } else { self.step }) as i32;
        match nudge {
            Nudge::Increase => step,
            Nudge::Decrease => -step,
        }
    }
}

/// Move `amount` points into `dimension`, taking them from the other two in
/// proportion to their current share.
///
/// The culture slot always absorbs the rounding remainder, whichever
/// dimension was shifted.
pub fn shift_weight(weights: MatchWeights, dimension: Dimension, amount: i32) -> MatchWeights {
    let current = weights.get(dimension) as i32;
    let new_value = (current + amount).clamp(0, 100);
    let diff = new_value - current;

    let others = dimension.others();
    let other_total: i32 = others.iter().map(|d| weights.get(*d) as i32).sum();

    let mut shifted = weights.with(dimension, new_value as u8);
    if other_total > 0 {
        for key in others {
            let share = weights.get(key) as f64 / other_total as f64;
            let value = (weights.get(key) as f64 - diff as f64 * share).max(0.0).round();
            shifted = shifted.with(key, value.min(100.0) as u8);
        }
    }

    let result = absorb_residual(shifted, dimension);
    trace!(%weights, %dimension, amount, %result, "weight shifted");
    result
}

/// Force the total back to 100. Culture takes the remainder first; whatever
/// it cannot hold without leaving [0, 100] spills onto compensation, then
/// skills, with the shifted dimension always last.
fn absorb_residual(weights: MatchWeights, shifted: Dimension) -> MatchWeights {
    let mut residual = 100 - weights.total() as i32;
    let mut spill = [Dimension::Compensation, Dimension::Skills];
    spill.sort_by_key(|d| *d == shifted);

    let mut result = weights;
    for key in std::iter::once(Dimension::Culture).chain(spill) {
        if residual == 0 {
            break;
        }
        let current = result.get(key) as i32;
        let adjusted = (current + residual).clamp(0, 100);
        residual -= adjusted - current;
        result = result.with(key, adjusted as u8);
    }
    result
}
