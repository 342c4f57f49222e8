//! Rockfall main entry point.
//!
//! A small arcade game written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A player-controlled ship dodges and shoots falling asteroids inside the
//! viewport, tracked by score and elapsed time, across a main-menu scene and
//! a gameplay scene.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (positions, colliders, sprites, markers)
//! - [`events`] – event types (scene transitions, menu clicks, audio bridge)
//! - [`game`] – scene setup/teardown hooks
//! - [`resources`] – ECS resources (config, input, clock, stores, state)
//! - [`systems`] – ECS systems (input, gameplay, HUD, audio, rendering)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, resources, and audio thread
//! 2. Register observers and the scene hook systems
//! 3. Run the driver loop: poll input, apply pending scene transitions, tick
//!    the gameplay chain, render one frame
//! 4. On shutdown, tear down the active scene once and join the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::{SceneChangedEvent, observe_scene_change_event};
use crate::events::menu::menu_selection_observer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, PlayPhase};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::asteroid::{asteroid_spawn, asteroid_update};
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::gamestate::{
    back_to_menu, check_pending_state, level_ended_confirm, level_is_running, pause_toggle,
    state_is_menu, state_is_playing,
};
use crate::systems::hud::hud_update;
use crate::systems::input::update_input_state;
use crate::systems::menu::{menu_pointer_system, menu_spawn_system};
use crate::systems::missile::missile_advance;
use crate::systems::render::render_system;
use crate::systems::ship::{fire_missiles, ship_control};
use crate::systems::viewport::update_viewport;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Rockfall — dodge and blast the falling rocks.
#[derive(Parser)]
#[command(version, about = "Rockfall: dodge and blast the falling rocks")]
struct Cli {
    /// Seed for the gameplay RNG; omit for a random run.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // missing file is fine, defaults apply
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title(&config.caption)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is a game binding, not the quit key
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(Viewport {
        w: rl.get_screen_width() as f32,
        h: rl.get_screen_height() as f32,
    });
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameRng::seeded(cli.seed));
    world.insert_resource(TextureStore::new());
    world.insert_resource(config);

    // Init audio before the first scene can request sounds
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(PlayPhase::default());
    world.insert_non_send_resource(FontStore::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // --------------- Scene hook systems ---------------
    // NOTE: registered systems are stored as entities; mark them Persistent
    // so they survive scene teardown.
    let mut systems_store = SystemsStore::new();
    for (name, id) in [
        ("setup", world.register_system(game::setup)),
        ("enter_menu", world.register_system(game::enter_menu)),
        ("exit_menu", world.register_system(game::exit_menu)),
        ("enter_play", world.register_system(game::enter_play)),
        ("exit_play", world.register_system(game::exit_play)),
        ("quit_game", world.register_system(game::quit_game)),
    ] {
        world.entity_mut(id.entity()).insert(Persistent);
        systems_store.insert(name, id);
    }
    world.insert_resource(systems_store);

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(menu_selection_observer), Persistent));
    // Ensure the observers are registered before the first transition fires.
    world.flush();

    // Enter Setup immediately: load assets, then the menu comes up.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(SceneChangedEvent {});
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_viewport);
    update.add_systems(update_input_state.after(update_viewport));
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        // audio bridge systems must run together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain(),
    );
    update.add_systems(menu_spawn_system);
    update.add_systems(
        menu_pointer_system
            .run_if(state_is_menu)
            .after(menu_spawn_system)
            .after(update_input_state),
    );
    update.add_systems(
        pause_toggle
            .run_if(state_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        level_ended_confirm
            .run_if(state_is_playing)
            .after(pause_toggle),
    );
    update.add_systems(back_to_menu.run_if(state_is_playing).after(level_ended_confirm));
    // The gameplay chain, in frame order. Each step carries its own run
    // condition so a phase change mid-frame stops the rest of the chain.
    update.add_systems(
        ship_control
            .run_if(level_is_running)
            .after(check_pending_state)
            .after(pause_toggle),
    );
    update.add_systems(fire_missiles.run_if(level_is_running).after(ship_control));
    update.add_systems(missile_advance.run_if(level_is_running).after(fire_missiles));
    update.add_systems(asteroid_update.run_if(level_is_running).after(missile_advance));
    update.add_systems(asteroid_spawn.run_if(level_is_running).after(asteroid_update));
    update.add_systems(hud_update.run_if(state_is_playing).after(asteroid_update));
    update.add_systems(
        render_system
            .after(asteroid_spawn)
            .after(hud_update)
            .after(menu_pointer_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame
    }

    // Tear down whichever scene is still up, exactly once.
    let current = world.resource::<GameState>().get().clone();
    let exit_hook = match current {
        GameStates::MainMenu => Some("exit_menu"),
        GameStates::Playing => Some("exit_play"),
        _ => None,
    };
    if let Some(key) = exit_hook {
        if let Some(id) = world.resource::<SystemsStore>().get(key).copied() {
            let _ = world.run_system(id);
        }
    }

    shutdown_audio(&mut world);
}
