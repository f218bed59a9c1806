//! Game loop
//!
//! The host calls `frame` once per display refresh and keeps requesting
//! frames while it returns `LoopControl::Continue`. Input handlers call
//! `press` between frames; both run on the same thread, never overlapping.

use crate::consts::*;
use crate::hud::{ScoreBoard, score_text};
use crate::render::{Surface, draw_game_over, draw_scene};
use crate::sim::{Field, GameEvent, GameState, PressOutcome, tick};
use crate::tuning::Tuning;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// One run plus its frame timing
pub struct Game {
    state: GameState,
    accumulator: f32,
}

impl Game {
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        log::info!(
            "New run: seed {}, field {}x{}",
            seed,
            field.width,
            field.height
        );
        Self {
            state: GameState::new(seed, field, tuning),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Show the initial score
    pub fn start(&mut self, board: &mut impl ScoreBoard) {
        board.show(&score_text(self.state.score));
    }

    /// Primary press from pointer or touch
    pub fn press(&mut self) -> PressOutcome {
        let outcome = self.state.press();
        if outcome == PressOutcome::RestartRequested {
            log::info!("Restart requested");
        }
        outcome
    }

    /// Run exactly one simulation tick
    pub fn step(&mut self) {
        tick(&mut self.state);
    }

    /// Advance by `dt` seconds of wall time, then draw
    pub fn frame(
        &mut self,
        dt: f32,
        surface: &mut impl Surface,
        board: &mut impl ScoreBoard,
    ) -> LoopControl {
        // Nothing moves or redraws after the overlay went up
        if self.state.is_over() {
            return LoopControl::Stop;
        }

        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= TICK_DT;
            substeps += 1;
            if self.state.is_over() {
                break;
            }
        }
        if substeps == MAX_SUBSTEPS {
            // Too far behind; drop the backlog instead of fast-forwarding
            self.accumulator = self.accumulator.min(TICK_DT);
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::Jumped => log::debug!("Jump at tick {}", self.state.time_ticks),
                GameEvent::ObstacleSpawned { id, kind } => {
                    log::debug!("Spawned {:?} #{}", kind, id);
                }
                GameEvent::ObstacleCleared { score } => board.show(&score_text(score)),
                GameEvent::GameOver { score } => log::info!(
                    "Run over after {} ticks: score {}, speed {:.2}",
                    self.state.time_ticks,
                    score,
                    self.state.speed
                ),
            }
        }

        draw_scene(&self.state, surface);

        if self.state.is_over() {
            draw_game_over(&self.state, surface);
            return LoopControl::Stop;
        }
        LoopControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::ScoreLog;
    use crate::render::{DrawCommand, NullSurface, Recorder};
    use crate::render::scene::GAME_OVER_TITLE;
    use crate::sim::autopilot::wants_jump;
    use crate::sim::{GamePhase, Obstacle, ObstacleKind};

    fn quiet_game() -> Game {
        Game::new(
            8,
            Field::new(800.0, 600.0),
            Tuning {
                cloud_spawn_chance: 0.0,
                obstacle_spawn_chance: 0.0,
                ..Default::default()
            },
        )
    }

    fn place(game: &mut Game, kind: ObstacleKind, x: f32) {
        let state = game.state_mut();
        let id = state.next_entity_id();
        let obs = Obstacle::new(id, kind, x, &state.field);
        state.obstacles.push(obs);
    }

    #[test]
    fn test_start_shows_zero() {
        let mut game = quiet_game();
        let mut board = ScoreLog::default();
        game.start(&mut board);
        assert_eq!(board.lines, vec!["Score: 0"]);
    }

    #[test]
    fn test_one_tick_per_refresh() {
        let mut game = quiet_game();
        let mut rec = Recorder::new();
        let mut board = ScoreLog::default();
        for i in 1..=10 {
            rec.clear();
            assert_eq!(game.frame(TICK_DT, &mut rec, &mut board), LoopControl::Continue);
            assert_eq!(game.state().time_ticks, i);
            assert!(matches!(rec.commands[0], DrawCommand::ClearRect { .. }));
        }
    }

    #[test]
    fn test_high_refresh_does_not_speed_up() {
        let mut game = quiet_game();
        let mut board = ScoreLog::default();
        for _ in 0..120 {
            game.frame(1.0 / 120.0, &mut NullSurface, &mut board);
        }
        // One second of wall time is about 60 ticks regardless of refresh rate
        let ticks = game.state().time_ticks;
        assert!((59..=61).contains(&ticks), "ticks {ticks}");
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game = quiet_game();
        let mut board = ScoreLog::default();
        game.frame(5.0, &mut NullSurface, &mut board);
        assert_eq!(game.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_score_display_updates_per_clear() {
        let mut game = quiet_game();
        let mut board = ScoreLog::default();
        game.start(&mut board);
        place(&mut game, ObstacleKind::Rock, -10.0);
        place(&mut game, ObstacleKind::Barrel, 20.0);
        for _ in 0..30 {
            game.frame(TICK_DT, &mut NullSurface, &mut board);
        }
        assert_eq!(board.lines, vec!["Score: 0", "Score: 1", "Score: 2"]);
    }

    #[test]
    fn test_game_over_draws_overlay_and_stops() {
        let mut game = quiet_game();
        let mut board = ScoreLog::default();
        let mut rec = Recorder::new();
        place(&mut game, ObstacleKind::Rock, PLAYER_X + PLAYER_WIDTH + 3.0);

        assert_eq!(game.frame(TICK_DT, &mut rec, &mut board), LoopControl::Stop);
        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert!(rec.texts().contains(&GAME_OVER_TITLE));
        assert!(rec.texts().contains(&"Score: 0"));

        // Later frames are ignored entirely
        rec.clear();
        let ticks = game.state().time_ticks;
        assert_eq!(game.frame(TICK_DT, &mut rec, &mut board), LoopControl::Stop);
        assert!(rec.commands.is_empty());
        assert_eq!(game.state().time_ticks, ticks);

        assert_eq!(game.press(), PressOutcome::RestartRequested);
    }

    #[test]
    fn test_frame_drains_every_event() {
        let mut game = Game::new(
            8,
            Field::new(800.0, 600.0),
            Tuning {
                obstacle_spawn_chance: 1.0,
                ..Default::default()
            },
        );
        let mut board = ScoreLog::default();
        game.press();
        place(&mut game, ObstacleKind::Rock, -100.0);
        game.frame(TICK_DT, &mut NullSurface, &mut board);
        assert!(game.state().events.is_empty());
        assert_eq!(board.lines, vec!["Score: 1"]);
    }

    #[test]
    fn test_frame_drains_game_over_event() {
        let mut game = quiet_game();
        place(&mut game, ObstacleKind::Rock, PLAYER_X + PLAYER_WIDTH + 3.0);
        game.frame(TICK_DT, &mut NullSurface, &mut ScoreLog::default());
        assert!(game.state().is_over());
        assert!(game.state().events.is_empty());
    }

    #[test]
    fn test_invalid_tuning_frame_does_not_panic() {
        let mut game = Game::new(
            8,
            Field::new(800.0, 600.0),
            Tuning {
                cloud_spawn_chance: 1.5,
                ..Default::default()
            },
        );
        assert_eq!(game.state().tuning, Tuning::default());
        for _ in 0..120 {
            game.frame(TICK_DT, &mut NullSurface, &mut ScoreLog::default());
        }
    }

    #[test]
    fn test_press_before_frame_jumps() {
        let mut game = quiet_game();
        assert_eq!(game.press(), PressOutcome::Jumped);
        assert_eq!(game.press(), PressOutcome::Ignored);
        let y = game.state().player.pos.y;
        game.frame(TICK_DT, &mut NullSurface, &mut ScoreLog::default());
        assert!(game.state().player.pos.y < y);
    }

    #[test]
    fn test_headless_autopilot_run() {
        let mut game = Game::new(2024, Field::new(800.0, 600.0), Tuning::default());
        let mut board = ScoreLog::default();
        game.start(&mut board);
        for _ in 0..1500 {
            if wants_jump(game.state()) {
                game.press();
            }
            if game.frame(TICK_DT, &mut NullSurface, &mut board) == LoopControl::Stop {
                break;
            }
        }
        let score = game.state().score;
        assert_eq!(board.last(), Some(score_text(score).as_str()));
    }
}
