//! Headless match engine for VOIDFALL.
//!
//! Owns the hecs ECS world, drives the turn phase state machine at a fixed
//! tick rate, and produces `MatchSnapshot`s for the presentation layer.
//! Completely headless (no rendering or I/O), enabling deterministic
//! testing: same seed = same match.

pub mod engine;
pub mod systems;
pub mod terrain;
pub mod turn;

pub use engine::{MatchConfig, MatchEngine, PlayerSetup};
pub use voidfall_core as core;
