//! Run state and core simulation types
//!
//! Everything a frame needs lives on one `GameState` session object; the
//! driver passes it explicitly rather than touching ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::collision::Aabb;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Title screen, no run in progress
    Idle,
    /// Active gameplay
    Running,
    /// Run suspended, resumable
    Paused,
    /// Run ended by a hazard; terminal until an explicit start
    GameOver,
}

/// What touching an item does to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Ends the run on contact
    Hazard,
    /// Increments score on contact
    Safety,
}

/// A falling item
#[derive(Debug, Clone)]
pub struct Item {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per baseline frame, before the difficulty multiplier
    pub fall_speed: f32,
    pub kind: ItemKind,
    pub label: &'static str,
}

impl Item {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::new(ITEM_WIDTH, ITEM_HEIGHT))
    }
}

/// The player's paddle; vertical position is fixed
#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge, clamped to [0, CANVAS_WIDTH - PADDLE_WIDTH]
    pub x: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Player {
    /// Move horizontally by `direction` (-1, 0, +1) scaled by `dt`,
    /// clamped to the canvas. Idempotent for direction 0.
    pub fn advance(&mut self, direction: f32, dt: f32) {
        self.x = (self.x + PLAYER_SPEED * direction * dt).clamp(0.0, CANVAS_WIDTH - PADDLE_WIDTH);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, PADDLE_Y),
            Vec2::new(self.x + PADDLE_WIDTH, PADDLE_Y + PADDLE_HEIGHT),
        )
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: RunPhase,
    pub score: u32,
    /// Spawn-rate and fall-speed multiplier, [1.0, 3.5], never decreases
    /// while a run is live
    pub difficulty: f32,
    pub player: Player,
    /// Active items, kept in spawn (= id) order
    pub items: Vec<Item>,
    /// Wall-clock ms of the most recent spawn
    pub last_spawn_ms: f64,
    /// Next entity ID; ids are never reused within a session
    next_id: u32,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Idle,
            score: 0,
            difficulty: MIN_DIFFICULTY,
            player: Player::default(),
            items: Vec::new(),
            last_spawn_ms: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a fresh run. Valid from Idle or GameOver.
    pub fn start(&mut self, now_ms: f64) {
        self.items.clear();
        self.score = 0;
        self.difficulty = MIN_DIFFICULTY;
        self.player = Player::default();
        self.last_spawn_ms = now_ms;
        self.phase = RunPhase::Running;
        log::info!("Run started (seed {})", self.seed);
    }

    /// Suspend or resume the run; no-op outside Running/Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            RunPhase::Running => RunPhase::Paused,
            RunPhase::Paused => RunPhase::Running,
            other => other,
        };
    }

    /// Terminal until an explicit `start`
    pub fn end_game(&mut self) {
        self.phase = RunPhase::GameOver;
        log::info!("Run ended with score {}", self.score);
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Advance the player by one baseline step outside the frame loop
    /// (the touch-hold path). Clamped like any other movement; no-op
    /// unless a run is live.
    pub fn nudge_player(&mut self, direction: f32) {
        if self.is_running() {
            self.player.advance(direction, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_clamps_to_canvas() {
        let mut player = Player::default();
        player.advance(-1.0, 10_000.0);
        assert_eq!(player.x, 0.0);
        player.advance(1.0, 10_000.0);
        assert_eq!(player.x, CANVAS_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_start_resets_run_state() {
        let mut state = GameState::new(7);
        state.score = 12;
        state.difficulty = 2.5;
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            pos: Vec2::new(0.0, 0.0),
            fall_speed: 3.0,
            kind: ItemKind::Hazard,
            label: "Oil spill",
        });
        state.phase = RunPhase::GameOver;

        state.start(1000.0);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, MIN_DIFFICULTY);
        assert!(state.items.is_empty());
        assert_eq!(state.last_spawn_ms, 1000.0);
    }

    #[test]
    fn test_entity_ids_never_reused() {
        let mut state = GameState::new(0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        state.start(0.0);
        let c = state.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_nudge_matches_keyboard_step() {
        let mut touched = GameState::new(0);
        touched.start(0.0);
        let mut keyed = touched.clone();

        touched.nudge_player(1.0);
        keyed.player.advance(1.0, 1.0);
        assert_eq!(touched.player.x, keyed.player.x);
    }

    #[test]
    fn test_nudge_only_moves_live_runs() {
        let mut state = GameState::new(0);
        let home = state.player.x;
        state.nudge_player(1.0);
        assert_eq!(state.player.x, home);

        state.start(0.0);
        state.toggle_pause();
        state.nudge_player(1.0);
        assert_eq!(state.player.x, home);
    }

    #[test]
    fn test_pause_toggles_only_live_runs() {
        let mut state = GameState::new(0);
        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::Idle);

        state.start(0.0);
        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::Running);

        state.end_game();
        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::GameOver);
    }
}
