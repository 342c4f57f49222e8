//! Screen-space position component.
//!
//! Used by HUD labels and menu texts that are laid out in window pixels and
//! never take part in collision or movement.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
