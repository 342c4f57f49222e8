//! Scene setup and teardown hooks.
//!
//! Each hook is a one-shot system registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and invoked
//! by the scene transition observer. The shared teardown behavior (despawn
//! every non-persistent entity) is a helper both exit hooks call explicitly.
//!
//! Asset loading happens once in [`setup`]; a missing file is fatal here —
//! the game refuses to start without its visuals.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::hud::HudLabel;
use crate::components::mapposition::MapPosition;
use crate::components::menu::{Menu, MenuAction};
use crate::components::persistent::Persistent;
use crate::components::screenposition::ScreenPosition;
use crate::components::ship::{SHIP_EXTENT, Ship};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::clock::LevelClock;
use crate::resources::fontstore::FontStore;
use crate::resources::gamestate::{GameStates, NextGameState, PlayPhase};
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;
use crate::resources::worldsignals::WorldSignals;
use log::info;

/// One-shot asset loading, then on to the main menu.
pub fn setup(
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
    mut tex_store: ResMut<TextureStore>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let font = rl
        .load_font(&th, "./assets/fonts/Pixeled.ttf")
        .expect("Failed to load font 'arcade'");
    fonts.add("arcade", font);

    for (key, path) in [
        ("logo", "./assets/menu/logo.png"),
        ("stars", "./assets/stars.png"),
        ("ship", "./assets/player.png"),
        ("missile", "./assets/missile.png"),
        ("asteroid_large", "./assets/asteroid_large.png"),
        ("asteroid_small", "./assets/asteroid_small.png"),
    ] {
        let texture = rl
            .load_texture(&th, path)
            .unwrap_or_else(|e| panic!("load {}: {}", path, e));
        tex_store.insert(key, texture);
    }

    // Fire-and-forget; load failures come back as messages and are logged.
    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: "menu".into(),
        path: "./assets/audio/music/main_menu.wav".into(),
    });
    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: "level".into(),
        path: "./assets/audio/music/level.wav".into(),
    });
    for id in ["button_over", "button_down", "laser", "explosion", "game_over"] {
        audio_cmd_writer.write(AudioCmd::LoadFx {
            id: id.into(),
            path: format!("./assets/audio/sfx/{}.wav", id),
        });
    }

    next_state.set(GameStates::MainMenu);
    info!("Setup done, heading to the main menu");
}

/// Build the main menu scene: logo, Play/Quit items, menu music.
pub fn enter_menu(
    mut commands: Commands,
    viewport: Res<Viewport>,
    tex_store: Res<TextureStore>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let (logo_w, logo_h) = tex_store
        .get("logo")
        .map(|t| (t.width as f32, t.height as f32))
        .unwrap_or((512.0, 128.0));

    commands.spawn((
        MapPosition::new(viewport.w * 0.5, viewport.h * 0.25),
        ZIndex(0),
        Sprite::centered("logo", logo_w, logo_h),
    ));

    commands.spawn(Menu::new(
        &[
            ("Play", MenuAction::StartGame),
            ("Quit", MenuAction::QuitGame),
        ],
        Vector2 {
            x: viewport.w * 0.5,
            y: viewport.h * 0.5,
        },
        90.0,
        "arcade",
        40.0,
    ));

    audio_cmds.write(AudioCmd::PlayMusic {
        id: "menu".into(),
        looped: true,
    });
}

/// Tear down the main menu scene.
pub fn exit_menu(
    mut commands: Commands,
    mut audio_cmds: MessageWriter<AudioCmd>,
    entities: Query<Entity, Without<Persistent>>,
) {
    audio_cmds.write(AudioCmd::StopMusic { id: "menu".into() });
    despawn_scene_entities(&mut commands, &entities);
}

/// Build a fresh level: background, ship, HUD, score 0, running clock.
pub fn enter_play(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut signals: ResMut<WorldSignals>,
    mut phase: ResMut<PlayPhase>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    commands.spawn((
        MapPosition::new(viewport.w * 0.5, viewport.h * 0.5),
        ZIndex(-10),
        Sprite::centered("stars", viewport.w, viewport.h),
    ));

    commands.spawn((
        Ship,
        MapPosition::new(viewport.w * 0.5, viewport.h - SHIP_EXTENT),
        BoxCollider::centered(SHIP_EXTENT, SHIP_EXTENT),
        Sprite::centered("ship", SHIP_EXTENT, SHIP_EXTENT),
        ZIndex(3),
    ));

    commands.spawn((
        HudLabel::Score,
        DynamicText::new("SCORE 0", "arcade", 24.0, Color::WHITE),
        ScreenPosition::new(16.0, 12.0),
    ));
    commands.spawn((
        HudLabel::Time,
        DynamicText::new("TIME 00:00", "arcade", 24.0, Color::WHITE),
        ScreenPosition::new(16.0, 44.0),
    ));

    signals.set_integer("score", 0);
    *phase = PlayPhase::Running;
    commands.insert_resource(LevelClock::start());

    audio_cmds.write(AudioCmd::PlayMusic {
        id: "level".into(),
        looped: true,
    });
    info!("Level started");
}

/// Tear down the level scene: stop the clock, clear the world, kill the music.
pub fn exit_play(
    mut commands: Commands,
    mut clock: Option<ResMut<LevelClock>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    entities: Query<Entity, Without<Persistent>>,
) {
    // Stop synchronously so no timer outlives its scene.
    if let Some(clock) = clock.as_deref_mut() {
        clock.stop();
    }
    commands.remove_resource::<LevelClock>();

    audio_cmds.write(AudioCmd::StopMusic { id: "level".into() });
    despawn_scene_entities(&mut commands, &entities);
    info!("Level torn down");
}

/// Raise the shutdown flag observed by the game driver.
pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    info!("Quit requested");
    signals.set_flag("quit_game");
}

/// Despawn every entity belonging to the current scene.
///
/// Observers and registered hook systems carry [`Persistent`] and survive.
fn despawn_scene_entities(commands: &mut Commands, entities: &Query<Entity, Without<Persistent>>) {
    for entity in entities.iter() {
        commands.entity(entity).despawn();
    }
}
