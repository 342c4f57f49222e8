//! Falling asteroid component.
//!
//! Each asteroid stores the downward speed it was given at spawn time and its
//! visual size class. Both are drawn from the seeded
//! [`GameRng`](crate::resources::rng::GameRng) so runs can be replayed.

use bevy_ecs::prelude::Component;

/// Visual size class of an asteroid, picked uniformly at spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsteroidSize {
    Large,
    Small,
}

impl AsteroidSize {
    /// Side length of the sprite and collider for this class, in pixels.
    pub fn extent(&self) -> f32 {
        match self {
            AsteroidSize::Large => 96.0,
            AsteroidSize::Small => 56.0,
        }
    }

    /// Texture key in the TextureStore for this class.
    pub fn tex_key(&self) -> &'static str {
        match self {
            AsteroidSize::Large => "asteroid_large",
            AsteroidSize::Small => "asteroid_small",
        }
    }
}

/// A falling asteroid.
#[derive(Component, Clone, Copy, Debug)]
pub struct Asteroid {
    /// Downward speed in pixels per frame, fixed at spawn time.
    pub speed: f32,
    /// Size class chosen at spawn time.
    pub size: AsteroidSize,
}
