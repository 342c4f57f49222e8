//! Player ship marker component.

use bevy_ecs::prelude::Component;

/// Side length of the ship sprite and collider, in pixels.
pub const SHIP_EXTENT: f32 = 64.0;

/// Tag component for the single player-controlled ship.
///
/// The ship exists only while a level is being played; colliding with an
/// asteroid despawns it together with the rest of the level entities.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ship;
