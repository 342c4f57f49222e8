//! Texture store resource.
//!
//! Textures are loaded once at scene setup and referenced by key from
//! [`Sprite`](crate::components::sprite::Sprite) components, so despawning an
//! entity never touches a GPU handle. Raylib textures are plain ffi structs
//! and may live in a regular (send) resource.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Loaded textures keyed by string IDs.
#[derive(Resource)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Add a texture under the given key.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
