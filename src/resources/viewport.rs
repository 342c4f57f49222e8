//! Viewport size resource.
//!
//! Stores the current window dimensions in pixels, refreshed once per frame
//! since the window is resizable. Clamping, culling, and spawning all read
//! their bounds from here.

use bevy_ecs::prelude::Resource;

/// Current viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Viewport {
    /// Width in pixels.
    pub w: f32,
    /// Height in pixels.
    pub h: f32,
}
