//! Game configuration resource.
//!
//! Manages window and gameplay settings loaded from an INI configuration
//! file. Provides defaults for safe startup and a validation step that
//! rejects unusable values before any window is created.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! caption = Rockfall
//! target_fps = 60
//!
//! [gameplay]
//! ship_step = 8.0
//! missile_step = 12.0
//! max_asteroid_speed = 6.0
//! missile_cap = 8
//! asteroid_target = 6
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_CAPTION: &str = "Rockfall";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SHIP_STEP: f32 = 8.0;
const DEFAULT_MISSILE_STEP: f32 = 12.0;
const DEFAULT_MAX_ASTEROID_SPEED: f32 = 6.0;
const DEFAULT_MISSILE_CAP: usize = 8;
const DEFAULT_ASTEROID_TARGET: usize = 6;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Window settings live in the `[window]` section, gameplay tuning in
/// `[gameplay]`. All step/speed values are pixels per frame at the
/// configured target FPS.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Window caption.
    pub caption: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Distance the ship moves per held direction intent, per frame.
    pub ship_step: f32,
    /// Distance a missile climbs per frame.
    pub missile_step: f32,
    /// Upper bound of the per-asteroid random fall speed.
    pub max_asteroid_speed: f32,
    /// Maximum number of live missiles.
    pub missile_cap: usize,
    /// Steady-state number of live asteroids the spawner maintains.
    pub asteroid_target: usize,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            caption: DEFAULT_CAPTION.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            ship_step: DEFAULT_SHIP_STEP,
            missile_step: DEFAULT_MISSILE_STEP,
            max_asteroid_speed: DEFAULT_MAX_ASTEROID_SPEED,
            missile_cap: DEFAULT_MISSILE_CAP,
            asteroid_target: DEFAULT_ASTEROID_TARGET,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(caption) = config.get("window", "caption") {
            self.caption = caption;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [gameplay] section
        if let Some(step) = config.getfloat("gameplay", "ship_step").ok().flatten() {
            self.ship_step = step as f32;
        }
        if let Some(step) = config.getfloat("gameplay", "missile_step").ok().flatten() {
            self.missile_step = step as f32;
        }
        if let Some(speed) = config
            .getfloat("gameplay", "max_asteroid_speed")
            .ok()
            .flatten()
        {
            self.max_asteroid_speed = speed as f32;
        }
        if let Some(cap) = config.getuint("gameplay", "missile_cap").ok().flatten() {
            self.missile_cap = cap as usize;
        }
        if let Some(target) = config
            .getuint("gameplay", "asteroid_target")
            .ok()
            .flatten()
        {
            self.asteroid_target = target as usize;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, ship_step={}, missile_step={}, max_asteroid_speed={}, missile_cap={}, asteroid_target={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.ship_step,
            self.missile_step,
            self.max_asteroid_speed,
            self.missile_cap,
            self.asteroid_target
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "caption", Some(self.caption.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("gameplay", "ship_step", Some(self.ship_step.to_string()));
        config.set(
            "gameplay",
            "missile_step",
            Some(self.missile_step.to_string()),
        );
        config.set(
            "gameplay",
            "max_asteroid_speed",
            Some(self.max_asteroid_speed.to_string()),
        );
        config.set(
            "gameplay",
            "missile_cap",
            Some(self.missile_cap.to_string()),
        );
        config.set(
            "gameplay",
            "asteroid_target",
            Some(self.asteroid_target.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject configurations the game cannot run with.
    ///
    /// Zero or negative steps, speeds, caps, or window dimensions would make
    /// the level degenerate (a ship that cannot move, missiles that never
    /// leave the gun, a spawner that never spawns), so they are refused at
    /// startup.
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(format!(
                "invalid window size {}x{}",
                self.window_width, self.window_height
            ));
        }
        if self.target_fps == 0 {
            return Err("target_fps must be positive".to_string());
        }
        if self.ship_step <= 0.0 {
            return Err(format!("ship_step must be positive, got {}", self.ship_step));
        }
        if self.missile_step <= 0.0 {
            return Err(format!(
                "missile_step must be positive, got {}",
                self.missile_step
            ));
        }
        if self.max_asteroid_speed <= 0.0 {
            return Err(format!(
                "max_asteroid_speed must be positive, got {}",
                self.max_asteroid_speed
            ));
        }
        if self.missile_cap == 0 {
            return Err("missile_cap must be positive".to_string());
        }
        if self.asteroid_target == 0 {
            return Err("asteroid_target must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ship_step_is_rejected() {
        let mut config = GameConfig::new();
        config.ship_step = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_asteroid_speed_is_rejected() {
        let mut config = GameConfig::new();
        config.max_asteroid_speed = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_caps_are_rejected() {
        let mut config = GameConfig::new();
        config.missile_cap = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::new();
        config.asteroid_target = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/rockfall.ini");
        let before = config.clone();
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, before.window_width);
        assert_eq!(config.missile_cap, before.missile_cap);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let path = std::env::temp_dir().join("rockfall_config_test.ini");
        let mut config = GameConfig::with_path(&path);
        config.window_width = 800;
        config.ship_step = 5.5;
        config.asteroid_target = 3;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_width, 800);
        assert_eq!(loaded.ship_step, 5.5);
        assert_eq!(loaded.asteroid_target, 3);

        let _ = std::fs::remove_file(&path);
    }
}
