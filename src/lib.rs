//! Safety Catch - a falling-block workplace-safety dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, run state)
//! - `renderer`: 2D canvas painting
//! - `input`: Held-key map and touch direction signal
//! - `scores`: Leaderboard with LocalStorage persistence

pub mod input;
pub mod renderer;
pub mod scores;
pub mod sim;

pub use scores::{Leaderboard, ScoreRecord};
pub use sim::{GameState, RunPhase, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 420.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;

    /// Milliseconds per update at the 60 ups baseline; `dt` is expressed
    /// in baseline frames so one unit of `dt` equals one 60 Hz step.
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest dt the loop will feed the sim (tab-switch catch-up guard)
    pub const MAX_DT: f32 = 4.0;

    /// Paddle geometry - the paddle moves along a fixed horizontal band
    pub const PADDLE_WIDTH: f32 = 72.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    pub const PADDLE_Y: f32 = CANVAS_HEIGHT - 48.0;
    /// Horizontal speed in pixels per baseline frame
    pub const PLAYER_SPEED: f32 = 6.0;

    /// Falling item geometry
    pub const ITEM_WIDTH: f32 = 86.0;
    pub const ITEM_HEIGHT: f32 = 26.0;
    /// Fall speed range in pixels per baseline frame (before difficulty)
    pub const ITEM_MIN_FALL_SPEED: f32 = 2.2;
    pub const ITEM_MAX_FALL_SPEED: f32 = 4.6;

    /// Spawn gating (wall-clock milliseconds)
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 900.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 260.0;

    /// Chance a spawned item is a collectible safety item
    pub const SAFETY_PROBABILITY: f64 = 0.55;

    /// Difficulty ramp per baseline frame, clamped to [1.0, 3.5]
    pub const DIFFICULTY_RAMP: f32 = 0.0008;
    pub const MIN_DIFFICULTY: f32 = 1.0;
    pub const MAX_DIFFICULTY: f32 = 3.5;

    /// Item labels longer than this are truncated with an ellipsis
    pub const LABEL_MAX_CHARS: usize = 12;
}
