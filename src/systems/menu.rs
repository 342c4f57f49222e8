//! Menu systems.
//!
//! - [`menu_spawn_system`] – spawns the text entities for newly added
//!   [`Menu`] components
//! - [`menu_pointer_system`] – pointer hover highlighting and click handling
//!
//! The menu is mouse-driven: hovering an item recolors it and plays the UI
//! beep once per hover-enter; clicking fires a
//! [`MenuSelectionEvent`](crate::events::menu::MenuSelectionEvent) that the
//! selection observer turns into a scene transition.

use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, RaylibHandle};

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::menu::Menu;
use crate::components::screenposition::ScreenPosition;
use crate::events::audio::AudioCmd;
use crate::events::menu::MenuSelectionEvent;

/// Spawns text entities for newly added [`Menu`] components.
///
/// Each item gets a centered [`DynamicText`] at its screen position; the
/// created entity is remembered on the item so the pointer system can
/// recolor it on hover.
pub fn menu_spawn_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Menu), Added<Menu>>,
) {
    for (_entity, mut menu) in query.iter_mut() {
        let font = menu.font.clone();
        let font_size = menu.font_size;
        let color = menu.normal_color;

        for item in menu.items.iter_mut() {
            let text_entity = commands
                .spawn((
                    DynamicText::new(item.label.clone(), font.clone(), font_size, color)
                        .with_centered(),
                    ScreenPosition::new(item.position.x, item.position.y),
                ))
                .id();
            item.entity = Some(text_entity);
        }
    }
}

/// Track the pointer over menu items; highlight, beep, and handle clicks.
pub fn menu_pointer_system(
    mut commands: Commands,
    rl: NonSend<RaylibHandle>,
    mut menus: Query<&mut Menu>,
    mut texts: Query<&mut DynamicText>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let mouse = rl.get_mouse_position();
    let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

    for mut menu in menus.iter_mut() {
        let hovered = menu.items.iter().position(|item| {
            BoxCollider::centered(item.size.x, item.size.y).contains_point(item.position, mouse)
        });

        if hovered != menu.hovered {
            // Restore the item the pointer left.
            if let Some(prev) = menu.hovered {
                if let Some(entity) = menu.items[prev].entity {
                    if let Ok(mut text) = texts.get_mut(entity) {
                        text.color = menu.normal_color;
                    }
                }
            }
            // Highlight the item the pointer entered.
            if let Some(index) = hovered {
                if let Some(entity) = menu.items[index].entity {
                    if let Ok(mut text) = texts.get_mut(entity) {
                        text.color = menu.hover_color;
                    }
                }
                audio_cmds.write(AudioCmd::PlayFx {
                    id: "button_over".into(),
                });
            }
            menu.hovered = hovered;
        }

        if clicked {
            if let Some(index) = menu.hovered {
                audio_cmds.write(AudioCmd::PlayFx {
                    id: "button_down".into(),
                });
                commands.trigger(MenuSelectionEvent {
                    action: menu.items[index].action,
                });
            }
        }
    }
}
