//! Pirate Dash - A one-button endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `render`: Canvas-style drawing surface and scene drawing
//! - `game`: Fixed-timestep loop that drives the simulation and the renderer
//! - `hud`: Score display
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod hud;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::{Game, LoopControl};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed logical tick (one display refresh on a 60 Hz screen)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (pixels/tick, negative is up)
    pub const JUMP_FORCE: f32 = -16.0;
    /// Obstacle scroll speed at run start (pixels/tick)
    pub const INITIAL_GAME_SPEED: f32 = 5.0;
    /// Speed added per obstacle that leaves the screen
    pub const SPEED_INCREMENT: f32 = 0.05;
    /// Per-tick chance to spawn a cloud
    pub const CLOUD_SPAWN_CHANCE: f64 = 0.005;
    /// Per-tick chance to try spawning an obstacle
    pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.015;
    /// Minimum distance between the spawn point and the newest obstacle
    pub const MIN_OBSTACLE_GAP: f32 = 300.0;

    /// Height of the ground band along the bottom edge
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 70.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Obstacles appear this far past the right edge
    pub const OBSTACLE_SPAWN_OFFSET: f32 = 50.0;
    pub const ROCK_SIZE: (f32, f32) = (30.0, 30.0);
    pub const BARREL_SIZE: (f32, f32) = (25.0, 35.0);

    /// Clouds appear this far past the right edge
    pub const CLOUD_SPAWN_OFFSET: f32 = 100.0;
    pub const CLOUD_SIZE: (f32, f32) = (80.0, 30.0);
    pub const CLOUD_MIN_SPEED: f32 = 0.5;
    pub const CLOUD_SPEED_RANGE: f32 = 0.5;

    /// Background ship
    pub const SHIP_SIZE: (f32, f32) = (80.0, 60.0);
    pub const SHIP_SPEED: f32 = 1.0;
    /// Distance past either edge before the ship reappears
    pub const SHIP_MARGIN: f32 = 200.0;
    /// Random extra distance added to the respawn x
    pub const SHIP_RESPAWN_SPREAD: f32 = 500.0;
    /// Random vertical jitter (±half) on respawn
    pub const SHIP_ALTITUDE_JITTER: f32 = 50.0;
}
