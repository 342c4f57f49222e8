//! Menu selection event and observer.

use crate::components::menu::MenuAction;
use crate::resources::gamestate::{GameStates, NextGameState};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event fired when a menu item is clicked.
#[derive(Event, Debug, Clone, Copy)]
pub struct MenuSelectionEvent {
    pub action: MenuAction,
}

/// Executes the action associated with a selected menu item.
///
/// - [`MenuAction::StartGame`] requests the level scene.
/// - [`MenuAction::QuitGame`] requests the quitting scene, whose hook raises
///   the shutdown flag observed by the game driver.
pub fn menu_selection_observer(
    trigger: On<MenuSelectionEvent>,
    mut next_game_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    info!("Menu selection: {:?}", event.action);
    match event.action {
        MenuAction::StartGame => next_game_state.set(GameStates::Playing),
        MenuAction::QuitGame => next_game_state.set(GameStates::Quitting),
    }
}
