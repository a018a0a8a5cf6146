//! Keyboard state
//!
//! Key events arrive whenever the platform delivers them; the simulation only
//! looks at the held set once, at the start of each tick.

use crate::sim::TickInput;

pub const KEY_SPACE: u32 = 32;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Held arrow keys; space doubles as up (jump)
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
    up: bool,
    jump: bool,
    down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for keys the game does not use
    pub fn key_down(&mut self, code: u32) -> bool {
        self.set(code, true)
    }

    pub fn key_up(&mut self, code: u32) -> bool {
        self.set(code, false)
    }

    fn set(&mut self, code: u32, held: bool) -> bool {
        let slot = match code {
            KEY_LEFT => &mut self.left,
            KEY_RIGHT => &mut self.right,
            KEY_UP => &mut self.up,
            KEY_SPACE => &mut self.jump,
            KEY_DOWN => &mut self.down,
            _ => return false,
        };
        *slot = held;
        true
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn intents(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            up: self.up || self.jump,
            down: self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_intents() {
        let mut keys = KeyState::new();
        assert!(keys.key_down(KEY_LEFT));
        assert!(keys.key_down(KEY_DOWN));
        let input = keys.intents();
        assert!(input.left && input.down);
        assert!(!input.right && !input.up);

        keys.key_up(KEY_LEFT);
        assert!(!keys.intents().left);
    }

    #[test]
    fn test_space_and_up_both_jump() {
        let mut keys = KeyState::new();
        keys.key_down(KEY_SPACE);
        keys.key_down(KEY_UP);
        keys.key_up(KEY_UP);
        // Space is still held
        assert!(keys.intents().up);
        keys.key_up(KEY_SPACE);
        assert!(!keys.intents().up);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.key_down(65));
        assert_eq!(keys.intents(), TickInput::default());
    }

    #[test]
    fn test_clear_releases_all() {
        let mut keys = KeyState::new();
        keys.key_down(KEY_RIGHT);
        keys.key_down(KEY_SPACE);
        keys.clear();
        assert_eq!(keys.intents(), TickInput::default());
    }
}
