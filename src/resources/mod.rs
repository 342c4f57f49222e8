//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `clock` – background elapsed-seconds counter for the level
//! - `fontstore` – loaded fonts keyed by string IDs (non-send)
//! - `gameconfig` – window and gameplay settings from config.ini
//! - `gamestate` – authoritative and pending scene state, play sub-state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `rng` – seedable random source for asteroid spawning
//! - `systemsstore` – registry of scene hook systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `viewport` – current window dimensions in pixels
//! - `worldsignals` – global integer/string/flag signals

pub mod audio;
pub mod clock;
pub mod fontstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rng;
pub mod systemsstore;
pub mod texturestore;
pub mod viewport;
pub mod worldsignals;
