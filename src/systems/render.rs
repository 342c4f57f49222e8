//! Rendering system.
//!
//! One pass per frame inside raylib's drawing scope: clear, draw all sprites
//! sorted by z-index, then draw screen-space texts on top. The frame is
//! presented when the draw handle goes out of scope, which is the display
//! refresh of the game driver iteration.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::fontstore::FontStore;
use crate::resources::texturestore::TextureStore;

const TEXT_SPACING: f32 = 1.0;

/// Draw the world sprites and the screen-space texts.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    fonts: NonSend<FontStore>,
    sprites: Query<(&Sprite, &MapPosition, &ZIndex)>,
    texts: Query<(&DynamicText, &ScreenPosition)>,
) {
    let mut d = rl.begin_drawing(&thread);
    d.clear_background(Color::BLACK);

    let mut to_draw: Vec<(&Sprite, &MapPosition, &ZIndex)> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, z)| **z);

    for (sprite, position, _z) in to_draw {
        if let Some(tex) = textures.get(sprite.tex_key.as_str()) {
            // Source is the whole texture; the destination rect scales it to
            // the sprite's world size with the pivot at Sprite.origin.
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
        }
    }

    for (text, position) in texts.iter() {
        let Some(font) = fonts.get(&text.font) else {
            continue;
        };
        let mut pos = position.pos;
        if text.centered {
            let measured = font.measure_text(&text.content, text.font_size, TEXT_SPACING);
            pos.x -= measured.x * 0.5;
            pos.y -= measured.y * 0.5;
        }
        d.draw_text_ex(font, &text.content, pos, text.font_size, TEXT_SPACING, text.color);
    }
}
