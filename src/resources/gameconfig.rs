//! Game configuration resource.
//!
//! Gameplay tunables loaded from an INI configuration file. Every key is
//! optional; anything missing keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! target_fps = 120
//! tile_size = 16
//! ; max_frame_seconds = 0.3
//!
//! [player]
//! speed = 0.7
//! start_x = 70
//! start_y = 50
//! frame_duration = 20
//!
//! [enemy]
//! hp = 50
//! min_speed = 0.3
//! max_speed = 0.5
//! batch_min = 2
//! batch_max = 6
//! frame_duration = 33.3
//!
//! [spawner]
//! interval_seconds = 8.3
//!
//! [weapon]
//! max_distance = 50
//! thrust_speed = 2.5
//! ```
//!
//! Speeds, distances and frame durations are in world units and tick units
//! (one tick unit is one frame at `target_fps`). The spawner interval is the
//! only value given in seconds.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::weapon::{MAX_THRUST_DISTANCE, THRUST_SPEED};
use crate::error::ConfigError;

const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_TILE_SIZE: u32 = 16;
const DEFAULT_PLAYER_SPEED: f32 = 0.7;
const DEFAULT_PLAYER_START: (f32, f32) = (70.0, 50.0);
const DEFAULT_PLAYER_FRAME_DURATION: f32 = 20.0;
const DEFAULT_ENEMY_HP: i32 = 50;
const DEFAULT_ENEMY_SPEED: (f32, f32) = (0.3, 0.5);
const DEFAULT_BATCH: (usize, usize) = (2, 6);
const DEFAULT_ENEMY_FRAME_DURATION: f32 = 33.3;
const DEFAULT_SPAWN_INTERVAL_SECONDS: f32 = 8.3;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub target_fps: u32,
    pub tile_size: u32,
    /// Clamp for raw frame seconds; `None` passes them through.
    pub max_frame_seconds: Option<f32>,
    pub player_speed: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_frame_duration: f32,
    pub enemy_hp: i32,
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    /// Inclusive lower bound of a spawn batch.
    pub batch_min: usize,
    /// Exclusive upper bound of a spawn batch.
    pub batch_max: usize,
    pub enemy_frame_duration: f32,
    pub spawn_interval_seconds: f32,
    pub weapon_max_distance: f32,
    pub weapon_thrust_speed: f32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            tile_size: DEFAULT_TILE_SIZE,
            max_frame_seconds: None,
            player_speed: DEFAULT_PLAYER_SPEED,
            player_start_x: DEFAULT_PLAYER_START.0,
            player_start_y: DEFAULT_PLAYER_START.1,
            player_frame_duration: DEFAULT_PLAYER_FRAME_DURATION,
            enemy_hp: DEFAULT_ENEMY_HP,
            enemy_min_speed: DEFAULT_ENEMY_SPEED.0,
            enemy_max_speed: DEFAULT_ENEMY_SPEED.1,
            batch_min: DEFAULT_BATCH.0,
            batch_max: DEFAULT_BATCH.1,
            enemy_frame_duration: DEFAULT_ENEMY_FRAME_DURATION,
            spawn_interval_seconds: DEFAULT_SPAWN_INTERVAL_SECONDS,
            weapon_max_distance: MAX_THRUST_DISTANCE,
            weapon_thrust_speed: THRUST_SPEED,
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

    /// Load configuration from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|message| ConfigError::Load {
            path: self.config_path.clone(),
            message,
        })?;
        self.apply(&config)?;
        info!(
            "Loaded config from {}: {} fps, tile {}, spawn every {}s",
            self.config_path.display(),
            self.target_fps,
            self.tile_size,
            self.spawn_interval_seconds
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|message| ConfigError::Load {
                path: self.config_path.clone(),
                message,
            })?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), ConfigError> {
        // [simulation] section
        if let Some(fps) = get_uint(config, "simulation", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(size) = get_uint(config, "simulation", "tile_size")? {
            self.tile_size = size as u32;
        }
        if let Some(max) = get_float(config, "simulation", "max_frame_seconds")? {
            self.max_frame_seconds = Some(max);
        }

        // [player] section
        if let Some(speed) = get_float(config, "player", "speed")? {
            self.player_speed = speed;
        }
        if let Some(x) = get_float(config, "player", "start_x")? {
            self.player_start_x = x;
        }
        if let Some(y) = get_float(config, "player", "start_y")? {
            self.player_start_y = y;
        }
        if let Some(d) = get_float(config, "player", "frame_duration")? {
            self.player_frame_duration = d;
        }

        // [enemy] section
        if let Some(hp) = get_int(config, "enemy", "hp")? {
            self.enemy_hp = hp as i32;
        }
        if let Some(speed) = get_float(config, "enemy", "min_speed")? {
            self.enemy_min_speed = speed;
        }
        if let Some(speed) = get_float(config, "enemy", "max_speed")? {
            self.enemy_max_speed = speed;
        }
        if let Some(n) = get_uint(config, "enemy", "batch_min")? {
            self.batch_min = n as usize;
        }
        if let Some(n) = get_uint(config, "enemy", "batch_max")? {
            self.batch_max = n as usize;
        }
        if let Some(d) = get_float(config, "enemy", "frame_duration")? {
            self.enemy_frame_duration = d;
        }

        // [spawner] section
        if let Some(secs) = get_float(config, "spawner", "interval_seconds")? {
            self.spawn_interval_seconds = secs;
        }

        // [weapon] section
        if let Some(d) = get_float(config, "weapon", "max_distance")? {
            self.weapon_max_distance = d;
        }
        if let Some(s) = get_float(config, "weapon", "thrust_speed")? {
            self.weapon_thrust_speed = s;
        }

        self.validate()
    }

    /// Reject combinations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("player", "speed", self.player_speed),
            ("player", "start_x", self.player_start_x),
            ("player", "start_y", self.player_start_y),
            ("player", "frame_duration", self.player_frame_duration),
            ("enemy", "min_speed", self.enemy_min_speed),
            ("enemy", "max_speed", self.enemy_max_speed),
            ("enemy", "frame_duration", self.enemy_frame_duration),
            ("spawner", "interval_seconds", self.spawn_interval_seconds),
            ("weapon", "max_distance", self.weapon_max_distance),
            ("weapon", "thrust_speed", self.weapon_thrust_speed),
        ];
        for (section, key, value) in floats {
            if !value.is_finite() {
                return Err(invalid(section, key, "must be a finite number"));
            }
        }
        if let Some(max) = self.max_frame_seconds {
            if !(max.is_finite() && max > 0.0) {
                return Err(invalid("simulation", "max_frame_seconds", "must be positive"));
            }
        }

        if self.target_fps == 0 {
            return Err(invalid("simulation", "target_fps", "must be positive"));
        }
        if self.tile_size == 0 {
            return Err(invalid("simulation", "tile_size", "must be positive"));
        }
        if self.batch_min >= self.batch_max {
            return Err(invalid(
                "enemy",
                "batch_max",
                format!("must be greater than batch_min ({})", self.batch_min),
            ));
        }
        if self.player_speed < 0.0 {
            return Err(invalid("player", "speed", "must not be negative"));
        }
        if self.player_frame_duration <= 0.0 {
            return Err(invalid("player", "frame_duration", "must be positive"));
        }
        if self.enemy_min_speed < 0.0 {
            return Err(invalid("enemy", "min_speed", "must not be negative"));
        }
        if self.enemy_min_speed > self.enemy_max_speed {
            return Err(invalid(
                "enemy",
                "max_speed",
                format!("must not be below min_speed ({})", self.enemy_min_speed),
            ));
        }
        if self.spawn_interval_seconds <= 0.0 {
            return Err(invalid("spawner", "interval_seconds", "must be positive"));
        }
        if self.enemy_frame_duration <= 0.0 {
            return Err(invalid("enemy", "frame_duration", "must be positive"));
        }
        if self.weapon_max_distance <= 0.0 {
            return Err(invalid("weapon", "max_distance", "must be positive"));
        }
        if self.weapon_thrust_speed < 0.0 {
            return Err(invalid("weapon", "thrust_speed", "must not be negative"));
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("simulation", "target_fps", Some(self.target_fps.to_string()));
        config.set("simulation", "tile_size", Some(self.tile_size.to_string()));
        if let Some(max) = self.max_frame_seconds {
            config.set("simulation", "max_frame_seconds", Some(max.to_string()));
        }

        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set("player", "start_x", Some(self.player_start_x.to_string()));
        config.set("player", "start_y", Some(self.player_start_y.to_string()));
        config.set(
            "player",
            "frame_duration",
            Some(self.player_frame_duration.to_string()),
        );

        config.set("enemy", "hp", Some(self.enemy_hp.to_string()));
        config.set("enemy", "min_speed", Some(self.enemy_min_speed.to_string()));
        config.set("enemy", "max_speed", Some(self.enemy_max_speed.to_string()));
        config.set("enemy", "batch_min", Some(self.batch_min.to_string()));
        config.set("enemy", "batch_max", Some(self.batch_max.to_string()));
        config.set(
            "enemy",
            "frame_duration",
            Some(self.enemy_frame_duration.to_string()),
        );

        config.set(
            "spawner",
            "interval_seconds",
            Some(self.spawn_interval_seconds.to_string()),
        );

        config.set(
            "weapon",
            "max_distance",
            Some(self.weapon_max_distance.to_string()),
        );
        config.set(
            "weapon",
            "thrust_speed",
            Some(self.weapon_thrust_speed.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Spawner interval converted to tick units.
    pub fn spawn_interval_ticks(&self) -> f32 {
        self.spawn_interval_seconds * self.target_fps as f32
    }
}

fn invalid(section: &'static str, key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        section,
        key,
        reason: reason.into(),
    }
}

fn get_uint(config: &Ini, section: &'static str, key: &'static str) -> Result<Option<u64>, ConfigError> {
    config
        .getuint(section, key)
        .map_err(|reason| invalid(section, key, reason))
}

fn get_int(config: &Ini, section: &'static str, key: &'static str) -> Result<Option<i64>, ConfigError> {
    config
        .getint(section, key)
        .map_err(|reason| invalid(section, key, reason))
}

fn get_float(config: &Ini, section: &'static str, key: &'static str) -> Result<Option<f32>, ConfigError> {
    config
        .getfloat(section, key)
        .map(|value| value.map(|v| v as f32))
        .map_err(|reason| invalid(section, key, reason))
}
