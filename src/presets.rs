//! Named canonical weight triples and tolerance matching

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WheelError;
use crate::types::{Dimension, MatchWeights};

/// Largest per-component difference still considered a match
pub const PRESET_TOLERANCE: u8 = 2;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    Balanced,
    SkillsFirst,
    CompensationFirst,
    CultureFirst,
}

impl Preset {
    /// Enumeration order used when classifying
    pub const ALL: [Preset; 4] = [
        Preset::Balanced,
        Preset::SkillsFirst,
        Preset::CompensationFirst,
        Preset::CultureFirst,
    ];

    pub fn weights(self) -> MatchWeights {
        match self {
            Preset::Balanced => MatchWeights::BALANCED,
            Preset::SkillsFirst => MatchWeights::new(60, 20, 20),
            Preset::CompensationFirst => MatchWeights::new(20, 60, 20),
            Preset::CultureFirst => MatchWeights::new(20, 20, 60),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Balanced => "balanced",
            Preset::SkillsFirst => "skillsFirst",
            Preset::CompensationFirst => "compensationFirst",
            Preset::CultureFirst => "cultureFirst",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WheelError::UnknownPreset(s.to_string()))
    }
}

/// True when every component is within `PRESET_TOLERANCE` of the preset
pub fn weights_match_preset(weights: MatchWeights, preset: Preset) -> bool {
    let target = preset.weights();
    Dimension::ALL
        .iter()
        .all(|d| weights.get(*d).abs_diff(target.get(*d)) <= PRESET_TOLERANCE)
}

/// First preset, in `Preset::ALL` order, that the weights match
pub fn matching_preset(weights: MatchWeights) -> Option<Preset> {
    Preset::ALL
        .into_iter()
        .find(|p| weights_match_preset(weights, *p))
}
