//! Keyboard state table.

use std::collections::HashMap;
use tracing::debug;

/// Tracks which keys are currently held down, by host key identifier.
///
/// Entries are written on every transition and kept around once seen; the
/// table is only emptied by a full reset. OS key-repeat delivers additional
/// down transitions for an already-down key and simply rewrites `true`.
#[derive(Debug, Default)]
pub struct KeyTable {
    states: HashMap<String, bool>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key-down transition.
    pub fn press(&mut self, key: &str) {
        self.states.insert(key.to_owned(), true);
    }

    /// Records a key-up transition.
    pub fn release(&mut self, key: &str) {
        self.states.insert(key.to_owned(), false);
    }

    /// Whether the key is currently held down. Unknown keys read as up.
    pub fn is_down(&self, key: &str) -> bool {
        self.states.get(key).copied().unwrap_or(false)
    }

    /// Drops all recorded key state.
    pub fn clear(&mut self) {
        if !self.states.is_empty() {
            debug!("Clearing key table ({} entries)", self.states.len());
        }
        self.states.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_read_as_up() {
        let table = KeyTable::new();
        assert!(!table.is_down("KeyW"));
    }

    #[test]
    fn tracks_transitions() {
        let mut table = KeyTable::new();
        table.press("KeyW");
        assert!(table.is_down("KeyW"));
        table.release("KeyW");
        assert!(!table.is_down("KeyW"));
    }

    #[test]
    fn released_keys_are_kept_not_pruned() {
        let mut table = KeyTable::new();
        table.press("Space");
        table.release("Space");
        assert!(!table.is_empty());
    }

    #[test]
    fn repeat_press_stays_down() {
        let mut table = KeyTable::new();
        table.press("KeyA");
        table.press("KeyA");
        assert!(table.is_down("KeyA"));
    }

    #[test]
    fn clear_empties_the_table() {
        let mut table = KeyTable::new();
        table.press("KeyA");
        table.press("KeyB");
        table.clear();
        assert!(table.is_empty());
        assert!(!table.is_down("KeyA"));
    }
}
