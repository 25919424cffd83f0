//! Weighted-overlap scoring of a candidate's attributes against a target's requirements

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{WheelError, WheelResult};

/// One attribute entry as callers supply it: a bare name, an object with a
/// `name` field, or anything else (which reads as the empty name)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    Name(String),
    Named { name: String },
    Other(serde_json::Value),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Name(name) | Attribute::Named { name } => name.as_str(),
            Attribute::Other(_) => "",
        }
    }

    /// Lowercased name used for comparison; whitespace is significant
    pub fn key(&self) -> String {
        self.name().to_lowercase()
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Attribute::Name(name.to_string())
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Attribute::Name(name)
    }
}

/// Scored attribute categories
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Values,
    Perks,
    Traits,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Skills, Category::Values, Category::Perks, Category::Traits];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Skills => "skills",
            Category::Values => "values",
            Category::Perks => "perks",
            Category::Traits => "traits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WheelError::UnknownCategory(s.to_string()))
    }
}

/// Attribute lists per category, used for both requirements and candidates.
/// Order is kept and duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSets {
    pub skills: Vec<Attribute>,
    pub values: Vec<Attribute>,
    pub perks: Vec<Attribute>,
    pub traits: Vec<Attribute>,
}

impl AttributeSets {
    pub fn get(&self, category: Category) -> &[Attribute] {
        match category {
            Category::Skills => &self.skills,
            Category::Values => &self.values,
            Category::Perks => &self.perks,
            Category::Traits => &self.traits,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub skills: f64,
    pub values: f64,
    pub perks: f64,
    pub traits: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            values: 0.20,
            perks: 0.20,
            traits: 0.20,
        }
    }
}

impl CategoryWeights {
    /// Build weights, rejecting negative or non-finite values
    pub fn new(skills: f64, values: f64, perks: f64, traits: f64) -> WheelResult<Self> {
        let weights = Self {
            skills,
            values,
            perks,
            traits,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Skills => self.skills,
            Category::Values => self.values,
            Category::Perks => self.perks,
            Category::Traits => self.traits,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    pub fn validate(&self) -> WheelResult<()> {
        for category in Category::ALL {
            let value = self.get(category);
            if !value.is_finite() || value < 0.0 {
                return Err(WheelError::InvalidCategoryWeight {
                    category: category.as_str(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Display band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            MatchBand::High
        } else if score >= 40 {
            MatchBand::Medium
        } else {
            MatchBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBand::High => "high",
            MatchBand::Medium => "medium",
            MatchBand::Low => "low",
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall: u8,
    pub breakdown: BTreeMap<Category, u8>,
}

impl MatchResult {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.overall)
    }
}

/// Percentage (0-100, rounded) of `required` items present in `candidate`.
///
/// An empty requirement list scores 0, as does an empty candidate list.
pub fn overlap_percentage(required: &[Attribute], candidate: &[Attribute]) -> u8 {
    if required.is_empty() || candidate.is_empty() {
        return 0;
    }

    let available: HashSet<String> = candidate
        .iter()
        .map(Attribute::key)
        .filter(|key| !key.is_empty())
        .collect();

    let matches = required
        .iter()
        .filter(|item| available.contains(&item.key()))
        .count();

    (matches as f64 / required.len() as f64 * 100.0).round() as u8
}

/// Score with the default category split
pub fn calculate_match(target: &AttributeSets, candidate: &AttributeSets) -> MatchResult {
    calculate_match_with(target, candidate, &CategoryWeights::default())
}

/// Score each category, then take the rounded weighted sum
pub fn calculate_match_with(
    target: &AttributeSets,
    candidate: &AttributeSets,
    weights: &CategoryWeights,
) -> MatchResult {
    let breakdown: BTreeMap<Category, u8> = Category::ALL
        .iter()
        .map(|c| (*c, overlap_percentage(target.get(*c), candidate.get(*c))))
        .collect();

    let weighted: f64 = breakdown
        .iter()
        .map(|(category, score)| *score as f64 * weights.get(*category))
        .sum();
    let overall = weighted.round().clamp(0.0, 100.0) as u8;

    debug!(overall, ?breakdown, "match scored");
    MatchResult { overall, breakdown }
}
