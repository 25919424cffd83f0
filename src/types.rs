//! Core value types for the priority wheel

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WheelError;

/// Point in the 300x300 logical space (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The bounded disk the puck moves inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub center: Point,
    pub radius: f64,
}

impl CircleConfig {
    pub const STANDARD: CircleConfig = CircleConfig {
        center: Point::new(150.0, 150.0),
        radius: 120.0,
    };

    /// Position of a pole on the circumference
    pub fn pole_position(&self, dimension: Dimension) -> Point {
        let rad = dimension.pole_angle().to_radians();
        Point {
            x: self.center.x + self.radius * rad.sin(),
            y: self.center.y - self.radius * rad.cos(),
        }
    }

    /// The three poles in `Dimension::ALL` order
    pub fn poles(&self) -> [Pole; 3] {
        Dimension::ALL.map(|dimension| Pole {
            dimension,
            angle: dimension.pole_angle(),
            position: self.pole_position(dimension),
        })
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One of the three priorities a user trades off against each other
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Skills,
    Compensation,
    Culture,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Skills, Dimension::Compensation, Dimension::Culture];

    /// Degrees clockwise from the top of the circle
    pub fn pole_angle(self) -> f64 {
        match self {
            Dimension::Skills => 0.0,
            Dimension::Compensation => 120.0,
            Dimension::Culture => 240.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Skills => "skills",
            Dimension::Compensation => "compensation",
            Dimension::Culture => "culture",
        }
    }

    /// The two dimensions other than `self`, in `ALL` order
    pub fn others(self) -> [Dimension; 2] {
        match self {
            Dimension::Skills => [Dimension::Compensation, Dimension::Culture],
            Dimension::Compensation => [Dimension::Skills, Dimension::Culture],
            Dimension::Culture => [Dimension::Skills, Dimension::Compensation],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WheelError::UnknownDimension(s.to_string()))
    }
}

/// Fixed anchor point on the circumference
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pole {
    pub dimension: Dimension,
    pub angle: f64,
    pub position: Point,
}

/// Three integer percentages that always sum to 100 after any conversion
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: u8,
    pub compensation: u8,
    pub culture: u8,
}

impl MatchWeights {
    pub const BALANCED: MatchWeights = MatchWeights::new(33, 33, 34);

    pub const fn new(skills: u8, compensation: u8, culture: u8) -> Self {
        Self {
            skills,
            compensation,
            culture,
        }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Skills => self.skills,
            Dimension::Compensation => self.compensation,
            Dimension::Culture => self.culture,
        }
    }

    /// Copy with one component replaced
    pub fn with(self, dimension: Dimension, value: u8) -> Self {
        match dimension {
            Dimension::Skills => Self { skills: value, ..self },
            Dimension::Compensation => Self {
                compensation: value,
                ..self
            },
            Dimension::Culture => Self { culture: value, ..self },
        }
    }

    pub fn total(&self) -> u32 {
        self.skills as u32 + self.compensation as u32 + self.culture as u32
    }

    /// Each component as a fraction of the total; `None` when the total is zero
    pub fn fractions(&self) -> Option<[f64; 3]> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some(Dimension::ALL.map(|d| self.get(d) as f64 / total))
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::BALANCED
    }
}

impl fmt::Display for MatchWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.skills, self.compensation, self.culture)
    }
}
