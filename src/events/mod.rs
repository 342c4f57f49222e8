//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – scene transition notifications for the high-level flow
//! - [`menu`] – menu click notifications and the action observer

pub mod audio;
pub mod gamestate;
pub mod menu;
