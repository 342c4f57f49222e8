//! Missile marker component and spawn geometry.

use bevy_ecs::prelude::Component;

/// Missile sprite/collider width in pixels.
pub const MISSILE_WIDTH: f32 = 8.0;
/// Missile sprite/collider height in pixels.
pub const MISSILE_HEIGHT: f32 = 24.0;
/// Horizontal distance of each gun from the ship center.
pub const GUN_OFFSET_X: f32 = 20.0;
/// Vertical muzzle offset from the ship center (negative is up).
pub const GUN_OFFSET_Y: f32 = -36.0;

/// Tag component for a live missile.
///
/// Missiles always fly straight up by the configured step per frame; they are
/// despawned above the top edge or on the first asteroid they hit.
#[derive(Component, Clone, Copy, Debug)]
pub struct Missile;
