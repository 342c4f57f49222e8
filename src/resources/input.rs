//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Direction intents use the
//! arrow keys; fire is Space, pause is P, confirm is Enter, back is Escape.
//!
//! Gameplay systems only ever read these boolean intents; the raw key
//! polling happens once per frame in
//! [`update_input_state`](crate::systems::input::update_input_state).

use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Move the ship towards the top of the viewport.
    pub move_up: BoolState,
    /// Move the ship towards the bottom of the viewport.
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    /// Fire the guns (held intent; one fire action per frame).
    pub fire: BoolState,
    /// Toggle pause while playing.
    pub pause: BoolState,
    /// Confirm/restart on the game-over screen.
    pub confirm: BoolState,
    /// Leave the level and return to the main menu.
    pub back: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            move_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            fire: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            pause: BoolState::bound_to(KeyboardKey::KEY_P),
            confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_all_inactive() {
        let input = InputState::default();
        assert!(!input.move_up.active);
        assert!(!input.move_down.active);
        assert!(!input.move_left.active);
        assert!(!input.move_right.active);
        assert!(!input.fire.active);
        assert!(!input.pause.active);
        assert!(!input.confirm.active);
        assert!(!input.back.active);
    }

    #[test]
    fn default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.move_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.fire.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.pause.key_binding, KeyboardKey::KEY_P);
        assert_eq!(input.confirm.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
    }
}
