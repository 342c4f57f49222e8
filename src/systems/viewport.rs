//! Viewport refresh system.

use bevy_ecs::prelude::*;
use raylib::prelude::RaylibHandle;

use crate::resources::viewport::Viewport;

/// Re-read the window size each frame; the window is resizable and
/// clamping/culling/spawning bounds follow it.
pub fn update_viewport(rl: NonSend<RaylibHandle>, mut viewport: ResMut<Viewport>) {
    viewport.w = rl.get_screen_width() as f32;
    viewport.h = rl.get_screen_height() as f32;
}
