//! Scene state machine integration tests: transition ordering, the menu
//! actions, pause, and the full game-over restart, all run headlessly with
//! the real scene hooks.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use std::time::Duration;

use rockfall::components::menu::{Menu, MenuAction};
use rockfall::components::persistent::Persistent;
use rockfall::components::ship::Ship;
use rockfall::events::audio::AudioCmd;
use rockfall::events::gamestate::observe_scene_change_event;
use rockfall::events::menu::{MenuSelectionEvent, menu_selection_observer};
use rockfall::game;
use rockfall::resources::clock::LevelClock;
use rockfall::resources::gameconfig::GameConfig;
use rockfall::resources::gamestate::{
    GameState, GameStates, NextGameState, NextGameStates, PlayPhase,
};
use rockfall::resources::input::InputState;
use rockfall::resources::rng::GameRng;
use rockfall::resources::systemsstore::SystemsStore;
use rockfall::resources::texturestore::TextureStore;
use rockfall::resources::viewport::Viewport;
use rockfall::resources::worldsignals::WorldSignals;
use rockfall::systems::gamestate::{check_pending_state, level_ended_confirm, pause_toggle};
use rockfall::systems::menu::menu_spawn_system;

fn insert_base_resources(world: &mut World) {
    world.insert_resource(GameConfig::new());
    world.insert_resource(Viewport {
        w: 1280.0,
        h: 720.0,
    });
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(PlayPhase::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameRng::seeded(Some(7)));
    world.insert_resource(TextureStore::new());
    world.init_resource::<Messages<AudioCmd>>();
}

/// World wired with the real scene hooks and observers, minus raylib.
fn make_scene_world() -> World {
    let mut world = World::new();
    insert_base_resources(&mut world);

    let mut store = SystemsStore::new();
    for (name, id) in [
        ("enter_menu", world.register_system(game::enter_menu)),
        ("exit_menu", world.register_system(game::exit_menu)),
        ("enter_play", world.register_system(game::enter_play)),
        ("exit_play", world.register_system(game::exit_play)),
        ("quit_game", world.register_system(game::quit_game)),
    ] {
        world.entity_mut(id.entity()).insert(Persistent);
        store.insert(name, id);
    }
    world.insert_resource(store);

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(menu_selection_observer), Persistent));
    world.flush();
    world
}

fn transition_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule
}

fn run_hook(world: &mut World, name: &str) {
    let id = *world
        .resource::<SystemsStore>()
        .get(name)
        .unwrap_or_else(|| panic!("hook '{}' not registered", name));
    world.run_system(id).unwrap();
}

fn ship_count(world: &mut World) -> usize {
    world.query_filtered::<Entity, With<Ship>>().iter(world).count()
}

fn push_trace(signals: &mut WorldSignals, token: &str) {
    let mut trace = signals.get_string("trace").cloned().unwrap_or_default();
    trace.push_str(token);
    signals.set_string("trace", trace);
}

// ==================== TRANSITION ORDERING ====================

fn probe_exit_menu(mut signals: ResMut<WorldSignals>) {
    push_trace(&mut signals, "exit_menu;");
}

fn probe_enter_play(mut signals: ResMut<WorldSignals>) {
    push_trace(&mut signals, "enter_play;");
}

#[test]
fn exit_hook_runs_before_enter_hook() {
    let mut world = World::new();
    insert_base_resources(&mut world);
    world.resource_mut::<GameState>().set(GameStates::MainMenu);

    let mut store = SystemsStore::new();
    let exit_id = world.register_system(probe_exit_menu);
    world.entity_mut(exit_id.entity()).insert(Persistent);
    store.insert("exit_menu", exit_id);
    let enter_id = world.register_system(probe_enter_play);
    world.entity_mut(enter_id.entity()).insert(Persistent);
    store.insert("enter_play", enter_id);
    world.insert_resource(store);

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.flush();

    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Playing);
    transition_schedule().run(&mut world);

    let signals = world.resource::<WorldSignals>();
    assert_eq!(
        signals.get_string("trace").map(String::as_str),
        Some("exit_menu;enter_play;")
    );
    assert_eq!(*world.resource::<GameState>().get(), GameStates::Playing);
    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    );
}

#[test]
fn no_pending_transition_means_no_hooks_run() {
    let mut world = World::new();
    insert_base_resources(&mut world);
    world.resource_mut::<GameState>().set(GameStates::MainMenu);

    let mut store = SystemsStore::new();
    let exit_id = world.register_system(probe_exit_menu);
    store.insert("exit_menu", exit_id);
    world.insert_resource(store);
    world.spawn(Observer::new(observe_scene_change_event));
    world.flush();

    transition_schedule().run(&mut world);

    assert!(world.resource::<WorldSignals>().get_string("trace").is_none());
    assert_eq!(*world.resource::<GameState>().get(), GameStates::MainMenu);
}

// ==================== MENU ACTIONS ====================

#[test]
fn clicking_play_builds_a_level() {
    let mut world = make_scene_world();
    world.resource_mut::<GameState>().set(GameStates::MainMenu);
    run_hook(&mut world, "enter_menu");

    // Spawn the item texts the way the frame schedule would.
    let mut menu_schedule = Schedule::default();
    menu_schedule.add_systems(menu_spawn_system);
    menu_schedule.run(&mut world);

    world.trigger(MenuSelectionEvent {
        action: MenuAction::StartGame,
    });
    transition_schedule().run(&mut world);

    assert_eq!(*world.resource::<GameState>().get(), GameStates::Playing);
    assert_eq!(ship_count(&mut world), 1);
    assert_eq!(*world.resource::<PlayPhase>(), PlayPhase::Running);
    // The menu scene is gone.
    assert_eq!(world.query::<&Menu>().iter(&world).count(), 0);
    // The fresh level owns a running clock.
    assert!(!world.resource::<LevelClock>().is_stopped());

    // Leave cleanly so the clock thread is joined.
    run_hook(&mut world, "exit_play");
}

#[test]
fn clicking_quit_raises_the_shutdown_flag() {
    let mut world = make_scene_world();
    world.resource_mut::<GameState>().set(GameStates::MainMenu);
    run_hook(&mut world, "enter_menu");

    world.trigger(MenuSelectionEvent {
        action: MenuAction::QuitGame,
    });
    transition_schedule().run(&mut world);

    assert_eq!(*world.resource::<GameState>().get(), GameStates::Quitting);
    assert!(world.resource::<WorldSignals>().has_flag("quit_game"));
}

// ==================== PAUSE ====================

#[test]
fn pause_key_toggles_phase_and_clock() {
    let mut world = make_scene_world();
    world.insert_resource(LevelClock::with_interval(Duration::from_millis(50)));
    world.resource_mut::<InputState>().pause.just_pressed = true;

    let mut schedule = Schedule::default();
    schedule.add_systems(pause_toggle);

    schedule.run(&mut world);
    assert_eq!(*world.resource::<PlayPhase>(), PlayPhase::Paused);
    assert!(world.resource::<LevelClock>().is_paused());

    schedule.run(&mut world);
    assert_eq!(*world.resource::<PlayPhase>(), PlayPhase::Running);
    assert!(!world.resource::<LevelClock>().is_paused());

    world.resource_mut::<LevelClock>().stop();
}

#[test]
fn pause_key_is_ignored_once_ended() {
    let mut world = make_scene_world();
    *world.resource_mut::<PlayPhase>() = PlayPhase::Ended;
    world.resource_mut::<InputState>().pause.just_pressed = true;

    let mut schedule = Schedule::default();
    schedule.add_systems(pause_toggle);
    schedule.run(&mut world);

    assert_eq!(*world.resource::<PlayPhase>(), PlayPhase::Ended);
}

// ==================== RESTART ====================

#[test]
fn confirm_after_game_over_rebuilds_a_fresh_level() {
    let mut world = make_scene_world();
    world.resource_mut::<GameState>().set(GameStates::Playing);
    run_hook(&mut world, "enter_play");
    assert_eq!(ship_count(&mut world), 1);

    // Simulate a played-out level that just ended.
    world.resource_mut::<WorldSignals>().set_integer("score", 5);
    world.resource_mut::<LevelClock>().stop();
    *world.resource_mut::<PlayPhase>() = PlayPhase::Ended;

    world.resource_mut::<InputState>().confirm.just_pressed = true;
    let mut schedule = Schedule::default();
    schedule.add_systems(level_ended_confirm);
    schedule.add_systems(check_pending_state.after(level_ended_confirm));
    schedule.run(&mut world);

    assert_eq!(*world.resource::<GameState>().get(), GameStates::Playing);
    assert_eq!(*world.resource::<PlayPhase>(), PlayPhase::Running);
    assert_eq!(
        world.resource::<WorldSignals>().get_integer("score"),
        Some(0)
    );
    assert_eq!(ship_count(&mut world), 1);
    assert!(!world.resource::<LevelClock>().is_stopped());
    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    );

    run_hook(&mut world, "exit_play");
    assert!(world.get_resource::<LevelClock>().is_none());
    assert_eq!(ship_count(&mut world), 0);
}

#[test]
fn confirm_does_nothing_while_running() {
    let mut world = make_scene_world();
    world.resource_mut::<GameState>().set(GameStates::Playing);
    world.resource_mut::<InputState>().confirm.just_pressed = true;

    let mut schedule = Schedule::default();
    schedule.add_systems(level_ended_confirm);
    schedule.run(&mut world);

    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    );
}
