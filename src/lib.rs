//! Priority Wheel - weight geometry and match scoring
//!
//! Turns a point dragged inside a bounded circle into a three-way
//! priority split (skills / compensation / culture) that always sums to 100:
//! - Point <-> weight conversion with an exact balanced reading at rest
//! - Magnetic pull while dragging, hard snap on release
//! - Keyboard redistribution and preset classification
//! - Weighted-overlap scoring of candidate attributes against requirements
//!
//! Every operation is a pure function of its inputs.

pub mod types;
pub mod error;
pub mod geometry;
pub mod conversion;
pub mod magnetic;
pub mod keyboard;
pub mod presets;
pub mod scoring;
pub mod config;
pub mod logging;
pub mod wheel;

pub use types::*;
pub use error::{WheelError, WheelResult};
pub use geometry::{clamp_to_circle, distance, point_to_angle, point_to_distance};
pub use conversion::{point_to_weights, polar_to_weights, weights_to_position};
pub use magnetic::{apply_magnetic_pull, apply_magnetic_snap, MagnetConfig, CENTER_SNAP_RADIUS, POLE_SNAP_RADIUS};
pub use keyboard::{shift_weight, KeyboardConfig, Nudge};
pub use presets::{matching_preset, weights_match_preset, Preset};
pub use scoring::{calculate_match, calculate_match_with, Attribute, AttributeSets, Category, CategoryWeights, MatchBand, MatchResult};
pub use config::WheelConfig;
pub use wheel::{DragPhase, PuckUpdate, Wheel};
