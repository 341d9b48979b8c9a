//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and testable:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - Wall-clock time passed in, never read from the platform
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, paddle_catches};
pub use spawn::{HAZARD_LABELS, SAFETY_LABELS, spawn_item};
pub use state::{GameState, Item, ItemKind, Player, RunPhase};
pub use tick::{TickInput, tick};
