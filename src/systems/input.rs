//! Input polling system.
//!
//! [`update_input_state`] reads hardware input from Raylib once per frame and
//! writes the results into [`crate::resources::input::InputState`]. Gameplay
//! systems never touch the keyboard directly; they read the boolean intents,
//! which keeps entity mutation single-threaded and the engine testable
//! without a window.

use bevy_ecs::prelude::*;
use raylib::prelude::RaylibHandle;

use crate::resources::input::{BoolState, InputState};

fn poll(rl: &RaylibHandle, state: &mut BoolState) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<RaylibHandle>) {
    poll(&rl, &mut input.move_up);
    poll(&rl, &mut input.move_down);
    poll(&rl, &mut input.move_left);
    poll(&rl, &mut input.move_right);
    poll(&rl, &mut input.fire);
    poll(&rl, &mut input.pause);
    poll(&rl, &mut input.confirm);
    poll(&rl, &mut input.back);
}
