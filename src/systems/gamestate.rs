//! Scene flow systems and run conditions.
//!
//! - [`check_pending_state`] emits the scene change event when a transition
//!   is pending; the observer in [`crate::events::gamestate`] applies it.
//! - [`pause_toggle`], [`level_ended_confirm`], and [`back_to_menu`] are the
//!   level-scene control actions driven by one-shot key presses.
//! - The `*_is_*` functions are run conditions used to gate systems on the
//!   current scene and play phase.

use crate::events::audio::AudioCmd;
use crate::events::gamestate::SceneChangedEvent;
use crate::resources::clock::LevelClock;
use crate::resources::gamestate::{
    GameState, GameStates, NextGameState, NextGameStates, PlayPhase,
};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;
use log::info;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    // Check if there is a pending scene change
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(SceneChangedEvent {});
    }
}

pub fn state_is_menu(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::MainMenu)
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// The gameplay chain runs only while the level scene is up and not
/// paused or ended.
pub fn level_is_running(state: Res<GameState>, phase: Res<PlayPhase>) -> bool {
    matches!(state.get(), GameStates::Playing) && matches!(*phase, PlayPhase::Running)
}

/// Toggle Running <-> Paused on the pause key.
///
/// Pausing suspends the clock and the music without resetting either; the
/// Ended phase ignores the key.
pub fn pause_toggle(
    input: Res<InputState>,
    mut phase: ResMut<PlayPhase>,
    clock: Option<Res<LevelClock>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    if !input.pause.just_pressed {
        return;
    }
    match *phase {
        PlayPhase::Running => {
            *phase = PlayPhase::Paused;
            if let Some(clock) = clock.as_deref() {
                clock.set_paused(true);
            }
            audio_cmds.write(AudioCmd::PauseMusic { id: "level".into() });
            info!("Level paused");
        }
        PlayPhase::Paused => {
            *phase = PlayPhase::Running;
            if let Some(clock) = clock.as_deref() {
                clock.set_paused(false);
            }
            audio_cmds.write(AudioCmd::ResumeMusic { id: "level".into() });
            info!("Level resumed");
        }
        PlayPhase::Ended => {}
    }
}

/// On the game-over screen, the confirm key rebuilds a fresh level.
///
/// Re-requesting the Playing scene runs the full exit + enter hooks, which
/// is the whole reset: new ship, score 0, new clock.
pub fn level_ended_confirm(
    input: Res<InputState>,
    phase: Res<PlayPhase>,
    mut next_state: ResMut<NextGameState>,
) {
    if matches!(*phase, PlayPhase::Ended) && input.confirm.just_pressed {
        next_state.set(GameStates::Playing);
    }
}

/// The back key abandons the level and returns to the main menu.
pub fn back_to_menu(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.back.just_pressed {
        next_state.set(GameStates::MainMenu);
    }
}
