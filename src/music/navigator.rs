//! Key selection state with wraparound navigation.

use super::key::{Key, KEY_COUNT};

/// Direction of a natural-key walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

/// Holds the index of the selected key.
///
/// The index is always in `0..12`; every mutation wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    index: usize,
}

impl Navigator {
    /// Starts at C.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Starts at `key`.
    #[must_use]
    pub const fn with_key(key: Key) -> Self {
        Self { index: key.index() }
    }

    /// Current index into [`Key::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Currently selected key.
    #[must_use]
    pub const fn current(&self) -> Key {
        Key::from_index(self.index)
    }

    /// Moves to the next key, wrapping B back to C.
    pub fn advance(&mut self) -> Key {
        self.index = (self.index + 1) % KEY_COUNT;
        self.current()
    }

    /// Moves to the previous key, wrapping C back to B.
    pub fn retreat(&mut self) -> Key {
        self.index = (self.index + KEY_COUNT - 1) % KEY_COUNT;
        self.current()
    }

    /// Selects `key` directly.
    pub fn jump_to(&mut self, key: Key) -> Key {
        self.index = key.index();
        self.current()
    }

    /// Nearest natural key before the current one, without moving.
    #[must_use]
    pub fn previous_natural(&self) -> Option<Key> {
        self.natural_neighbor(Step::Back)
    }

    /// Nearest natural key after the current one, without moving.
    #[must_use]
    pub fn next_natural(&self) -> Option<Key> {
        self.natural_neighbor(Step::Forward)
    }

    fn natural_neighbor(&self, step: Step) -> Option<Key> {
        let offset = match step {
            Step::Back => KEY_COUNT - 1,
            Step::Forward => 1,
        };

        let mut index = (self.index + offset) % KEY_COUNT;
        // Stop once the walk comes back around to where it started
        while !Key::from_index(index).is_natural() && index != self.index {
            index = (index + offset) % KEY_COUNT;
        }

        let key = Key::from_index(index);
        key.is_natural().then_some(key)
    }
}
