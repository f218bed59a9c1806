//! Per-tick probabilistic spawning of clouds and obstacles
//!
//! A fixed chance per tick at a fixed tick rate approximates Poisson arrivals.
//! Obstacles additionally respect a minimum gap so every pair stays jumpable.

use glam::Vec2;
use rand::Rng;

use super::state::{Cloud, GameEvent, GameState, Obstacle, ObstacleKind};
use crate::consts::*;

/// Run both spawn rolls for this tick (cloud first, then obstacle)
pub fn spawn(state: &mut GameState) {
    if state.rng.random_bool(state.tuning.cloud_spawn_chance) {
        spawn_cloud(state);
    }
    if state.rng.random_bool(state.tuning.obstacle_spawn_chance) {
        try_spawn_obstacle(state);
    }
}

/// X coordinate where new obstacles appear
#[inline]
pub fn obstacle_spawn_x(state: &GameState) -> f32 {
    state.field.width + OBSTACLE_SPAWN_OFFSET
}

/// True if the newest obstacle is far enough left of the spawn point
pub fn gap_is_clear(state: &GameState) -> bool {
    match state.obstacles.last() {
        Some(last) => obstacle_spawn_x(state) - last.pos.x >= state.tuning.min_obstacle_gap,
        None => true,
    }
}

/// Append an obstacle of random kind if the gap allows it
pub fn try_spawn_obstacle(state: &mut GameState) -> Option<u32> {
    if !gap_is_clear(state) {
        return None;
    }

    let kind = if state.rng.random_bool(0.5) {
        ObstacleKind::Rock
    } else {
        ObstacleKind::Barrel
    };
    let id = state.next_entity_id();
    let x = obstacle_spawn_x(state);
    state.obstacles.push(Obstacle::new(id, kind, x, &state.field));
    state.events.push(GameEvent::ObstacleSpawned { id, kind });
    Some(id)
}

/// Append a cloud in the top third of the field
pub fn spawn_cloud(state: &mut GameState) {
    let y = state.rng.random::<f32>() * (state.field.height / 3.0);
    let speed = CLOUD_MIN_SPEED + state.rng.random::<f32>() * CLOUD_SPEED_RANGE;
    state.clouds.push(Cloud {
        pos: Vec2::new(state.field.width + CLOUD_SPAWN_OFFSET, y),
        size: Vec2::new(CLOUD_SIZE.0, CLOUD_SIZE.1),
        speed,
    });
}
