//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation, input,
//! and rendering.
//!
//! Submodules overview
//! - [`asteroid`] – asteroid culling, collision resolution, and spawning
//! - [`audio`] – the audio thread and the bridge with its message queues
//! - [`gamestate`] – pending scene transitions, pause/confirm/back actions,
//!   and run conditions
//! - [`hud`] – refresh the score and time labels
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`menu`] – menu spawning and pointer hover/click handling
//! - [`missile`] – missile advancement and culling
//! - [`render`] – draw sprites and texts using Raylib
//! - [`ship`] – ship movement intents and firing
//! - [`viewport`] – refresh the viewport resource from the window

pub mod asteroid;
pub mod audio;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod menu;
pub mod missile;
pub mod render;
pub mod ship;
pub mod viewport;
