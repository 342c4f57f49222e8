//! Missile advancement and culling.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::missile::Missile;
use crate::resources::gameconfig::GameConfig;

/// Advance every live missile upward by the fixed step and despawn any
/// missile that has passed the top edge.
pub fn missile_advance(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut missiles: Query<(Entity, &mut MapPosition), With<Missile>>,
) {
    for (entity, mut position) in missiles.iter_mut() {
        position.pos.y -= config.missile_step;
        if position.pos.y <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
