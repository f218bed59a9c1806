//! Game state and core simulation types
//!
//! Everything a run mutates lives in `GameState`, so independent runs can
//! coexist (one per test, one per page).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended (terminal until the host reloads)
    GameOver,
}

/// Play field dimensions, read once from the host viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Top edge of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }
}

/// The runner
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, negative is up)
    pub dy: f32,
    pub grounded: bool,
}

impl Player {
    /// Create a player standing on the ground
    pub fn on_ground(field: &Field) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, field.ground_y() - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            dy: 0.0,
            grounded: true,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Rock,
    Barrel,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        let (w, h) = match self {
            ObstacleKind::Rock => ROCK_SIZE,
            ObstacleKind::Barrel => BARREL_SIZE,
        };
        Vec2::new(w, h)
    }
}

/// An obstacle resting on the ground
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, x: f32, field: &Field) -> Self {
        let size = kind.size();
        Self {
            id,
            kind,
            pos: Vec2::new(x, field.ground_y() - size.y),
            size,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Right edge has scrolled past the left edge of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// A decorative cloud
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels/tick)
    pub speed: f32,
}

impl Cloud {
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Background ship, recycled instead of destroyed
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Ship {
    pub fn new(field: &Field) -> Self {
        Self {
            pos: Vec2::new(field.width + SHIP_MARGIN, Self::base_altitude(field)),
            size: Vec2::new(SHIP_SIZE.0, SHIP_SIZE.1),
            speed: SHIP_SPEED,
        }
    }

    #[inline]
    pub fn base_altitude(field: &Field) -> f32 {
        field.height / 2.0 - 50.0
    }

    /// Far enough past the left edge to respawn
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.pos.x + self.size.x < -SHIP_MARGIN
    }
}

/// Result of a primary press (pointer or touch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Jump impulse applied
    Jumped,
    /// Airborne, nothing changed
    Ignored,
    /// Run is over, host should reload
    RestartRequested,
}

/// Gameplay events for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Jumped,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    /// An obstacle left the screen; `score` is the new total
    ObstacleCleared { score: u32 },
    GameOver { score: u32 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub field: Field,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Obstacles cleared this run
    pub score: u32,
    /// Scroll speed (pixels/tick), never decreases
    pub speed: f32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live clouds in spawn order
    pub clouds: Vec<Cloud>,
    pub ship: Ship,
    /// Pending events, drained by the loop each frame
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new run with the given seed. Invalid tuning falls back to defaults.
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning ({}), using defaults", e);
                Tuning::default()
            }
        };
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            score: 0,
            speed: tuning.initial_speed,
            phase: GamePhase::Running,
            player: Player::on_ground(&field),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            ship: Ship::new(&field),
            events: Vec::new(),
            next_id: 1,
            tuning,
            field,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Handle a primary press. Jumps only from the ground; no air jumps.
    pub fn press(&mut self) -> PressOutcome {
        if self.is_over() {
            return PressOutcome::RestartRequested;
        }
        if !self.player.grounded {
            return PressOutcome::Ignored;
        }
        self.player.dy = self.tuning.jump_force;
        self.player.grounded = false;
        self.events.push(GameEvent::Jumped);
        PressOutcome::Jumped
    }

    /// Latch the run into GameOver (no-op if already over)
    pub fn end_run(&mut self) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
