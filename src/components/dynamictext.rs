use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Dynamic text component for rendering variable strings on screen.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font key in the FontStore.
    pub font: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: raylib::prelude::Color,
    /// When true the position is treated as the center of the rendered text.
    pub centered: bool,
}

impl DynamicText {
    /// Creates a new DynamicText component anchored at its top-left corner.
    pub fn new(
        content: impl Into<String>,
        font: impl Into<String>,
        font_size: f32,
        color: raylib::prelude::Color,
    ) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
            font_size,
            color,
            centered: false,
        }
    }

    /// Builder-style: anchor the text at its center instead of the top-left.
    pub fn with_centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
