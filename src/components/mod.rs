//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`asteroid`] – falling asteroid with per-instance speed and size class
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`hud`] – markers identifying the score and time HUD labels
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`menu`] – pointer-driven menu with hover highlighting
//! - [`missile`] – missile marker and gun geometry
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`screenposition`] – screen-space position for UI elements
//! - [`ship`] – player ship marker
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod asteroid;
pub mod boxcollider;
pub mod dynamictext;
pub mod hud;
pub mod mapposition;
pub mod menu;
pub mod missile;
pub mod persistent;
pub mod screenposition;
pub mod ship;
pub mod sprite;
pub mod zindex;
