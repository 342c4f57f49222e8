//! Scene transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`SceneChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the appropriate exit/enter systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! The old scene's exit hook always runs before the new scene's enter hook,
//! so teardown strictly precedes setup — including a Playing → Playing
//! transition, which is how the game-over confirm rebuilds a fresh level.

use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending scene transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Observer that applies a pending scene transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - calls the exit hook of the previous scene
///   - calls the enter hook of the new scene
///   - resets [`NextGameState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("SceneChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        // Clone the next state value first so we don't keep an immutable borrow while mutating.
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                let old_state = game_state.get().clone();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                game_state.set(new_state.clone());
                next_game_state.reset();
                on_state_exit(&old_state, &mut commands, &systems_store);
                on_state_enter(&new_state, &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No scene change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_scene_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run the "enter" hook for the given scene.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let key = match state {
        GameStates::None => {
            debug!("Entered None state");
            return;
        }
        GameStates::Setup => "setup",
        GameStates::MainMenu => "enter_menu",
        GameStates::Playing => "enter_play",
        GameStates::Quitting => "quit_game",
    };
    run_hook(key, commands, systems_store);
}

/// Internal: run the "exit" hook for the given scene.
fn on_state_exit(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let key = match state {
        GameStates::MainMenu => "exit_menu",
        GameStates::Playing => "exit_play",
        GameStates::None | GameStates::Setup | GameStates::Quitting => {
            debug!("Exited {:?} state (no teardown hook)", state);
            return;
        }
    };
    run_hook(key, commands, systems_store);
}

fn run_hook(key: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(key) {
        Some(id) => commands.run_system(*id),
        None => warn!("Scene hook '{}' not found in SystemsStore", key),
    }
}
