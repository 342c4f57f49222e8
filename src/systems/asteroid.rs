//! Asteroid culling, collision resolution, advancement, and spawning.
//!
//! [`asteroid_update`] is the ordered core of the frame: per asteroid it
//! culls below the bottom edge, tests missiles, tests the ship, and only
//! then advances. At most one collision is resolved per frame — the loop
//! stops at the first hit and the remaining overlaps resolve on later
//! frames. [`asteroid_spawn`] then tops the field back up to the configured
//! target, one asteroid per frame.

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Color;

use crate::components::asteroid::{Asteroid, AsteroidSize};
use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::missile::Missile;
use crate::components::screenposition::ScreenPosition;
use crate::components::ship::Ship;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::clock::LevelClock;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::PlayPhase;
use crate::resources::rng::GameRng;
use crate::resources::viewport::Viewport;
use crate::resources::worldsignals::WorldSignals;

/// One pass over the live asteroids, in spawn order.
///
/// Per asteroid: cull below the viewport, resolve a missile hit (destroy
/// both, score +1), resolve a ship hit (end the level), otherwise fall by
/// the asteroid's own speed. Any resolved collision stops the pass for this
/// frame.
pub fn asteroid_update(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut phase: ResMut<PlayPhase>,
    mut clock: Option<ResMut<LevelClock>>,
    mut signals: ResMut<WorldSignals>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut asteroids: Query<(Entity, &mut MapPosition, &BoxCollider, &Asteroid)>,
    missiles: Query<(Entity, &MapPosition, &BoxCollider), (With<Missile>, Without<Asteroid>)>,
    ships: Query<(Entity, &MapPosition, &BoxCollider), (With<Ship>, Without<Asteroid>)>,
) {
    let ship = ships.iter().next();
    let mut ship_destroyed = false;

    'asteroids: for (entity, mut position, collider, asteroid) in asteroids.iter_mut() {
        // Cull once the asteroid has passed the bottom edge.
        if position.pos.y >= viewport.h {
            commands.entity(entity).despawn();
            continue;
        }

        for (missile_entity, missile_pos, missile_box) in missiles.iter() {
            if collider.overlaps(position.pos, missile_box, missile_pos.pos) {
                commands.entity(entity).despawn();
                commands.entity(missile_entity).despawn();
                let score = signals.get_integer("score").unwrap_or(0) + 1;
                signals.set_integer("score", score);
                audio_cmds.write(AudioCmd::PlayFx {
                    id: "explosion".into(),
                });
                debug!("Asteroid shot down, score {}", score);
                // One collision resolved per frame.
                break 'asteroids;
            }
        }

        if let Some((_, ship_pos, ship_box)) = ship {
            if collider.overlaps(position.pos, ship_box, ship_pos.pos) {
                ship_destroyed = true;
                break 'asteroids;
            }
        }

        position.pos.y += asteroid.speed;
    }

    if ship_destroyed {
        let score = signals.get_integer("score").unwrap_or(0);
        info!("Ship destroyed, level over at score {}", score);

        if let Some((ship_entity, _, _)) = ship {
            commands.entity(ship_entity).despawn();
        }
        // try_despawn: an entity culled earlier this frame is already queued.
        for (entity, _, _, _) in asteroids.iter() {
            commands.entity(entity).try_despawn();
        }
        for (entity, _, _) in missiles.iter() {
            commands.entity(entity).try_despawn();
        }

        *phase = PlayPhase::Ended;
        if let Some(clock) = clock.as_deref_mut() {
            clock.stop();
        }

        audio_cmds.write(AudioCmd::StopMusic { id: "level".into() });
        audio_cmds.write(AudioCmd::PlayFx {
            id: "game_over".into(),
        });

        commands.spawn((
            DynamicText::new("GAME OVER", "arcade", 56.0, Color::RED).with_centered(),
            ScreenPosition::new(viewport.w * 0.5, viewport.h * 0.5 - 40.0),
        ));
        commands.spawn((
            DynamicText::new("Press Enter to fly again", "arcade", 24.0, Color::WHITE)
                .with_centered(),
            ScreenPosition::new(viewport.w * 0.5, viewport.h * 0.5 + 40.0),
        ));
    }
}

/// Keep the asteroid field at its target population.
///
/// When the live count is below the target, spawn exactly one asteroid this
/// frame at a random x along the top edge, with a fresh random speed in
/// `(0, max_asteroid_speed]` and a random size class.
pub fn asteroid_spawn(
    mut commands: Commands,
    config: Res<GameConfig>,
    viewport: Res<Viewport>,
    mut rng: ResMut<GameRng>,
    asteroids: Query<(), With<Asteroid>>,
) {
    if asteroids.iter().count() >= config.asteroid_target {
        return;
    }

    let size = if rng.0.bool() {
        AsteroidSize::Large
    } else {
        AsteroidSize::Small
    };
    let extent = size.extent();
    let x = rng.0.f32() * viewport.w;
    // 1 - f32() lies in (0, 1], so the speed is never zero.
    let speed = config.max_asteroid_speed * (1.0 - rng.0.f32());

    commands.spawn((
        Asteroid { speed, size },
        MapPosition::new(x, -extent * 0.5),
        BoxCollider::centered(extent, extent),
        Sprite::centered(size.tex_key(), extent, extent),
        ZIndex(1),
    ));
}
