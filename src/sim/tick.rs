//! Per-frame update
//!
//! `dt` is expressed in 60 Hz baseline frames (elapsed ms / FRAME_MS) so
//! movement, the difficulty ramp, and fall speed are frame-rate
//! independent. Spawn gating runs on wall-clock milliseconds passed in by
//! the driver; the sim never reads the platform clock itself.

use crate::consts::*;
use crate::sim::collision::paddle_catches;
use crate::sim::spawn::spawn_item;
use crate::sim::state::{GameState, ItemKind, RunPhase};

/// Input for a single frame. `start` and `pause` are one-shot flags the
/// driver clears after each tick; `direction` reflects currently-held keys.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// -1.0 left, 0.0 idle, +1.0 right
    pub direction: f32,
    /// Begin a run (Space/Enter while idle or game over)
    pub start: bool,
    /// Toggle pause ('p' during a run)
    pub pause: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: f64) {
    if input.start && matches!(state.phase, RunPhase::Idle | RunPhase::GameOver) {
        state.start(now_ms);
    }
    if input.pause {
        state.toggle_pause();
    }
    if state.phase != RunPhase::Running {
        return;
    }

    state.player.advance(input.direction.clamp(-1.0, 1.0), dt);

    state.difficulty =
        (state.difficulty + DIFFICULTY_RAMP * dt).clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);

    // Spawn rate scales with difficulty, floored so it stays bounded
    let interval = (BASE_SPAWN_INTERVAL_MS / state.difficulty as f64).max(MIN_SPAWN_INTERVAL_MS);
    if now_ms - state.last_spawn_ms >= interval {
        spawn_item(state);
        state.last_spawn_ms = now_ms;
    }

    for item in &mut state.items {
        item.pos.y += item.fall_speed * dt * state.difficulty;
    }

    // Collision pass, in id order. Safety catches are staged; the first
    // hazard catch ends the run mid-pass and discards the staged score,
    // so a frame with both a safety and a hazard contact scores nothing.
    let paddle = state.player.aabb();
    let mut collected: Vec<u32> = Vec::new();
    let mut score_delta = 0u32;
    let mut hazard_hit = false;
    for item in &state.items {
        if !paddle_catches(&item.aabb(), &paddle) {
            continue;
        }
        match item.kind {
            ItemKind::Hazard => {
                log::info!("Hazard contact: {}", item.label);
                hazard_hit = true;
                break;
            }
            ItemKind::Safety => {
                collected.push(item.id);
                score_delta += 1;
            }
        }
    }

    if hazard_hit {
        state.items.clear();
        state.end_game();
        return;
    }

    state
        .items
        .retain(|i| !collected.contains(&i.id) && i.pos.y <= CANVAS_HEIGHT);
    state.score += score_delta;
}
