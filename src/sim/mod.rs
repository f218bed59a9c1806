//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick deltas only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    Cloud, Field, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, PressOutcome,
    Ship,
};
pub use tick::tick;
