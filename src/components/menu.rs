use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::{Color, Vector2};

/// Action performed when a menu item is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a fresh game level.
    StartGame,
    /// Request application shutdown.
    QuitGame,
}

/// One clickable entry of a [`Menu`].
#[derive(Clone, Debug)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
    /// Center of the item's hit box, in screen pixels.
    pub position: Vector2,
    /// Hit box size, in screen pixels.
    pub size: Vector2,
    /// Entity holding the item's text, filled in when the menu is spawned.
    pub entity: Option<Entity>,
}

/// Pointer-driven menu: items highlight on hover and fire their action on click.
#[derive(Component, Clone, Debug)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    /// Index of the item currently under the pointer, if any.
    pub hovered: Option<usize>,
    pub font: String,
    pub font_size: f32,
    pub normal_color: Color,
    pub hover_color: Color,
}

impl Menu {
    /// Build a vertical menu centered on `origin` with one row per item.
    pub fn new(
        labels: &[(&str, MenuAction)],
        origin: Vector2,
        item_spacing: f32,
        font: impl Into<String>,
        font_size: f32,
    ) -> Self {
        let items = labels
            .iter()
            .enumerate()
            .map(|(i, (label, action))| MenuItem {
                label: label.to_string(),
                action: *action,
                position: Vector2 {
                    x: origin.x,
                    y: origin.y + i as f32 * item_spacing,
                },
                size: Vector2 {
                    x: label.len() as f32 * font_size * 0.7,
                    y: font_size * 1.2,
                },
                entity: None,
            })
            .collect();
        Self {
            items,
            hovered: None,
            font: font.into(),
            font_size,
            normal_color: Color::WHITE,
            hover_color: Color::RED,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_colors(mut self, normal: Color, hover: Color) -> Self {
        self.normal_color = normal;
        self.hover_color = hover;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_stacked_vertically() {
        let menu = Menu::new(
            &[("Play", MenuAction::StartGame), ("Quit", MenuAction::QuitGame)],
            Vector2 { x: 640.0, y: 360.0 },
            80.0,
            "arcade",
            40.0,
        );
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].position.y, 360.0);
        assert_eq!(menu.items[1].position.y, 440.0);
        assert!(menu.hovered.is_none());
    }
}
