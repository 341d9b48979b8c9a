//! Input state
//!
//! Tracks which movement keys are currently held (lowercase key names, set
//! on keydown and cleared on keyup) and the touch-button direction. Both
//! reduce to a single -1/0/+1 signal per frame.

use std::collections::HashMap;

/// Keys that steer left / right
const LEFT_KEYS: [&str; 2] = ["arrowleft", "a"];
const RIGHT_KEYS: [&str; 2] = ["arrowright", "d"];

/// Persistent direction from an on-screen touch button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchDirection {
    Left,
    Right,
}

impl TouchDirection {
    pub fn signum(self) -> f32 {
        match self {
            TouchDirection::Left => -1.0,
            TouchDirection::Right => 1.0,
        }
    }
}

/// Map of lowercase key name to held state
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashMap<String, bool>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keydown/keyup. `key` is lowercased so "ArrowLeft" and
    /// "arrowleft" are the same key.
    pub fn set(&mut self, key: &str, held: bool) {
        self.keys.insert(key.to_lowercase(), held);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Net movement signal from held keys: -1 left, +1 right, 0 when
    /// neither or both sides are down.
    pub fn direction(&self) -> f32 {
        let left = LEFT_KEYS.iter().any(|k| self.is_held(k));
        let right = RIGHT_KEYS.iter().any(|k| self.is_held(k));
        (right as i8 - left as i8) as f32
    }

    pub fn release_all(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_held_keys() {
        let mut keys = HeldKeys::new();
        assert_eq!(keys.direction(), 0.0);

        keys.set("ArrowLeft", true);
        assert_eq!(keys.direction(), -1.0);

        keys.set("d", true);
        assert_eq!(keys.direction(), 0.0);

        keys.set("ArrowLeft", false);
        assert_eq!(keys.direction(), 1.0);
    }

    #[test]
    fn test_key_names_are_case_insensitive() {
        let mut keys = HeldKeys::new();
        keys.set("A", true);
        assert!(keys.is_held("a"));
        assert_eq!(keys.direction(), -1.0);
        keys.set("a", false);
        assert_eq!(keys.direction(), 0.0);
    }

    #[test]
    fn test_release_all() {
        let mut keys = HeldKeys::new();
        keys.set("arrowright", true);
        keys.release_all();
        assert_eq!(keys.direction(), 0.0);
    }

    #[test]
    fn test_touch_direction_signum() {
        assert_eq!(TouchDirection::Left.signum(), -1.0);
        assert_eq!(TouchDirection::Right.signum(), 1.0);
    }
}
