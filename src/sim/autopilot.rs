//! Demo autopilot - presses when the next obstacle is close
//!
//! Used by the headless native runner and by tests.

use super::state::GameState;

/// Ticks of lead time between the press and the obstacle reaching the player
const LEAD_TICKS: f32 = 12.0;

/// Should the runner press now?
pub fn wants_jump(state: &GameState) -> bool {
    if state.is_over() || !state.player.grounded {
        return false;
    }

    let player_front = state.player.pos.x + state.player.size.x;
    state
        .obstacles
        .iter()
        .map(|o| o.pos.x - player_front)
        .filter(|gap| *gap > 0.0)
        .any(|gap| gap <= state.speed * LEAD_TICKS)
}
