//! High-level scene state resources.
//!
//! These resources track the authoritative current scene of the game and any
//! pending transition requested by systems. See
//! `crate::events::gamestate::observe_scene_change_event` for how a
//! transition is applied and setup/teardown hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete top-level scenes the game can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// One-shot asset loading before the first scene.
    Setup,
    /// Title screen with the Play/Quit menu.
    MainMenu,
    /// The asteroid level.
    Playing,
    /// Shutdown requested; the driver exits after this frame.
    Quitting,
}

/// Representation of a requested next scene.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current scene.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current scene immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so the scene
    /// setup/teardown hooks run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Intent to change to a new scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// The `check_pending_state` system will emit the scene change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

impl Default for NextGameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sub-state of the level scene.
///
/// `Paused` suspends the gameplay chain and clock increments, but not
/// rendering or HUD refresh. `Ended` means the ship was destroyed; the level
/// waits for the confirm key to rebuild itself.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayPhase {
    #[default]
    Running,
    Paused,
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_transition_roundtrip() {
        let mut next = NextGameState::new();
        assert_eq!(*next.get(), NextGameStates::Unchanged);

        next.set(GameStates::Playing);
        assert_eq!(
            *next.get(),
            NextGameStates::Pending(GameStates::Playing)
        );

        next.reset();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
    }

    #[test]
    fn game_state_starts_at_none() {
        let state = GameState::new();
        assert_eq!(*state.get(), GameStates::None);
    }
}
