//! Item spawner
//!
//! Spawns one item at a time with randomized horizontal position, fall
//! speed, and kind. All randomness comes from the session's seeded RNG so
//! runs replay deterministically for a given seed.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::sim::state::{GameState, Item, ItemKind};

/// Things on the floor that end the run
pub const HAZARD_LABELS: [&str; 10] = [
    "Exposed wire",
    "Oil spill",
    "Falling crate",
    "Open flame",
    "Broken ladder",
    "Loose scaffold",
    "Toxic fumes",
    "Blocked exit",
    "Frayed cable",
    "Unmarked step",
];

/// Gear worth collecting
pub const SAFETY_LABELS: [&str; 10] = [
    "Hard hat",
    "Safety goggles",
    "Ear defenders",
    "Hi-vis vest",
    "Steel toe boots",
    "First aid kit",
    "Fire blanket",
    "Safety harness",
    "Wet floor sign",
    "Lockout tag",
];

/// Create a new falling item just above the visible area and append it to
/// the session. Safety items are slightly favored so runs stay collectible.
pub fn spawn_item(state: &mut GameState) {
    let id = state.next_entity_id();
    let x = state.rng.random_range(0.0..=(CANVAS_WIDTH - ITEM_WIDTH));
    let fall_speed = state
        .rng
        .random_range(ITEM_MIN_FALL_SPEED..=ITEM_MAX_FALL_SPEED);
    let (kind, label) = if state.rng.random_bool(SAFETY_PROBABILITY) {
        let label = SAFETY_LABELS[state.rng.random_range(0..SAFETY_LABELS.len())];
        (ItemKind::Safety, label)
    } else {
        let label = HAZARD_LABELS[state.rng.random_range(0..HAZARD_LABELS.len())];
        (ItemKind::Hazard, label)
    };

    state.items.push(Item {
        id,
        pos: Vec2::new(x, -ITEM_HEIGHT),
        fall_speed,
        kind,
        label,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_within_bounds() {
        let mut state = GameState::new(42);
        for _ in 0..200 {
            spawn_item(&mut state);
        }
        for item in &state.items {
            assert!(item.pos.x >= 0.0);
            assert!(item.pos.x <= CANVAS_WIDTH - ITEM_WIDTH);
            assert_eq!(item.pos.y, -ITEM_HEIGHT);
            assert!(item.fall_speed >= ITEM_MIN_FALL_SPEED);
            assert!(item.fall_speed <= ITEM_MAX_FALL_SPEED);
        }
    }

    #[test]
    fn test_labels_match_kind() {
        let mut state = GameState::new(7);
        for _ in 0..200 {
            spawn_item(&mut state);
        }
        for item in &state.items {
            match item.kind {
                ItemKind::Hazard => assert!(HAZARD_LABELS.contains(&item.label)),
                ItemKind::Safety => assert!(SAFETY_LABELS.contains(&item.label)),
            }
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..50 {
            spawn_item(&mut a);
            spawn_item(&mut b);
        }
        for (x, y) in a.items.iter().zip(b.items.iter()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.fall_speed, y.fall_speed);
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.label, y.label);
        }
    }

    #[test]
    fn test_kind_bias_favors_safety() {
        let mut state = GameState::new(1234);
        for _ in 0..10_000 {
            spawn_item(&mut state);
        }
        let safety = state
            .items
            .iter()
            .filter(|i| i.kind == ItemKind::Safety)
            .count();
        let ratio = safety as f64 / state.items.len() as f64;
        assert!(ratio > 0.50 && ratio < 0.60, "safety ratio {ratio}");
    }
}
