//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication: the current score, the shutdown flag the
//! game driver polls, and free-form strings (the scene hook tests use one
//! as a trace buffer).

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Integer signals addressed by string keys.
    integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }

    /// Raise a flag.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Clear a flag if present.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    /// Whether a flag is raised.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_overwrite() {
        let mut signals = WorldSignals::default();
        signals.set_integer("score", 1);
        signals.set_integer("score", 2);
        assert_eq!(signals.get_integer("score"), Some(2));
        assert_eq!(signals.get_integer("missing"), None);
    }

    #[test]
    fn flags_raise_and_clear() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("quit_game"));
        signals.set_flag("quit_game");
        assert!(signals.has_flag("quit_game"));
        signals.clear_flag("quit_game");
        assert!(!signals.has_flag("quit_game"));
    }
}
