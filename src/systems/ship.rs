//! Ship control systems: movement intents and firing.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::missile::{
    GUN_OFFSET_X, GUN_OFFSET_Y, MISSILE_HEIGHT, MISSILE_WIDTH, Missile,
};
use crate::components::ship::Ship;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::viewport::Viewport;

/// Apply the held movement intents to the ship, one fixed step per frame.
///
/// Vertical intents are mutually exclusive per frame with up taking
/// priority, as are horizontal intents with right taking priority. The
/// resulting position is clamped so the ship's collider never leaves the
/// viewport, whatever the window size is this frame.
pub fn ship_control(
    input: Res<InputState>,
    config: Res<GameConfig>,
    viewport: Res<Viewport>,
    mut ships: Query<(&mut MapPosition, &BoxCollider), With<Ship>>,
) {
    let Some((mut position, collider)) = ships.iter_mut().next() else {
        return;
    };

    let step = config.ship_step;
    if input.move_up.active {
        position.pos.y -= step;
    } else if input.move_down.active {
        position.pos.y += step;
    }
    if input.move_right.active {
        position.pos.x += step;
    } else if input.move_left.active {
        position.pos.x -= step;
    }

    // min-then-max rather than clamp: a window shrunk below the ship size
    // must not panic, just pin to the top-left.
    let half_w = collider.size.x * 0.5;
    let half_h = collider.size.y * 0.5;
    position.pos.x = position.pos.x.min(viewport.w - half_w).max(half_w);
    position.pos.y = position.pos.y.min(viewport.h - half_h).max(half_h);
}

/// Fire the guns while the fire intent is held.
///
/// One fire action per frame: a pair of missiles leaves the left and right
/// gun, but only when the pair still fits under the missile cap. Holding
/// the key at the cap is a no-op.
pub fn fire_missiles(
    mut commands: Commands,
    input: Res<InputState>,
    config: Res<GameConfig>,
    ships: Query<&MapPosition, With<Ship>>,
    missiles: Query<(), With<Missile>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    if !input.fire.active {
        return;
    }
    let Some(ship_pos) = ships.iter().next() else {
        return;
    };
    if missiles.iter().count() + 2 > config.missile_cap {
        return;
    }

    for gun_x in [-GUN_OFFSET_X, GUN_OFFSET_X] {
        commands.spawn((
            Missile,
            MapPosition::new(ship_pos.pos.x + gun_x, ship_pos.pos.y + GUN_OFFSET_Y),
            BoxCollider::centered(MISSILE_WIDTH, MISSILE_HEIGHT),
            Sprite::centered("missile", MISSILE_WIDTH, MISSILE_HEIGHT),
            ZIndex(2),
        ));
    }
    audio_cmds.write(AudioCmd::PlayFx { id: "laser".into() });
}

/// Compute the missile spawn points for a ship position. Shared with tests.
#[cfg_attr(not(test), allow(dead_code))]
pub fn gun_positions(ship_pos: Vector2) -> [Vector2; 2] {
    [
        Vector2 {
            x: ship_pos.x - GUN_OFFSET_X,
            y: ship_pos.y + GUN_OFFSET_Y,
        },
        Vector2 {
            x: ship_pos.x + GUN_OFFSET_X,
            y: ship_pos.y + GUN_OFFSET_Y,
        },
    ]
}
