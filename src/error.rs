//! Load-time error types.
//!
//! Everything that can fail does so while starting up: reading the config,
//! the sprite manifest or the level. Once the world is built, ticking it is
//! infallible. All of these are fatal for the binary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path}: {message}")]
    Load { path: PathBuf, message: String },
    #[error("failed to save config file {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid value for [{section}] {key}: {reason}")]
    Invalid {
        section: &'static str,
        key: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed sprite manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no sprite sequence named '{0}'")]
    MissingSequence(String),
    #[error("sprite sequence '{0}' has no frames")]
    EmptySequence(String),
    #[error("no tile sprite for tile code '{0}'")]
    MissingTileSprite(char),
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("unrecognized tile code '{code}' at row {row}, column {column}")]
    UnknownTileCode {
        code: String,
        row: usize,
        column: usize,
    },
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed level file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Any startup failure.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Level(#[from] LevelError),
}
