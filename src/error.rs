//! Error types for the fallible edges of the crate

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
    #[error("unknown dimension '{0}' (expected skills, compensation or culture)")]
    UnknownDimension(String),

    #[error("unknown category '{0}' (expected skills, values, perks or traits)")]
    UnknownCategory(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("category weight for {category} must be finite and non-negative, got {value}")]
    InvalidCategoryWeight { category: &'static str, value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type WheelResult<T> = std::result::Result<T, WheelError>;
