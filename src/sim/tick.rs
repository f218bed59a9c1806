//! Fixed timestep simulation tick
//!
//! One tick: physics, spawning, then the advance pass (clouds, ship,
//! obstacles with collision and scoring). Drawing happens afterwards in
//! `render::scene` from the resulting state.

use rand::Rng;

use super::physics::integrate;
use super::spawn::spawn;
use super::state::{GameEvent, GameState, Ship};
use crate::consts::*;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    // Frozen once the run is over
    if state.is_over() {
        return;
    }

    state.time_ticks += 1;

    let ground_y = state.field.ground_y();
    integrate(&mut state.player, state.tuning.gravity, ground_y);

    spawn(state);

    advance_clouds(state);
    advance_ship(state);
    advance_obstacles(state);
}

/// Move clouds by their own speed, drop the ones fully off-screen
fn advance_clouds(state: &mut GameState) {
    state.clouds.retain_mut(|cloud| {
        cloud.pos.x -= cloud.speed;
        !cloud.is_off_screen()
    });
}

/// Move the ship; once well past the left edge, respawn it off the right edge
fn advance_ship(state: &mut GameState) {
    let ship = &mut state.ship;
    ship.pos.x -= ship.speed;
    if ship.is_gone() {
        let field = state.field;
        ship.pos.x = field.width + state.rng.random::<f32>() * SHIP_RESPAWN_SPREAD + SHIP_MARGIN;
        ship.pos.y = Ship::base_altitude(&field)
            + state.rng.random::<f32>() * SHIP_ALTITUDE_JITTER
            - SHIP_ALTITUDE_JITTER / 2.0;
    }
}

/// Scroll obstacles, test each against the player, and score the ones
/// that leave the screen. The first hit ends the run and leaves the
/// remaining obstacles untouched for this tick.
fn advance_obstacles(state: &mut GameState) {
    let GameState {
        obstacles,
        player,
        score,
        speed,
        tuning,
        events,
        ..
    } = &mut *state;

    let player_box = player.aabb();
    let mut hit = false;

    obstacles.retain_mut(|obs| {
        if hit {
            return true;
        }

        obs.pos.x -= *speed;

        if player_box.overlaps(&obs.aabb()) {
            log::debug!("Collision with {:?} #{}", obs.kind, obs.id);
            hit = true;
            return true;
        }

        if obs.is_off_screen() {
            *score += 1;
            *speed += tuning.speed_increment;
            events.push(GameEvent::ObstacleCleared { score: *score });
            log::debug!("Cleared #{}: score {}, speed {:.2}", obs.id, score, speed);
            return false;
        }

        true
    });

    if hit {
        state.end_run();
    }
}
