//! Sprite registry.
//!
//! Stands in for the asset provider: frames arrive already decoded by the
//! host, the simulation only sees [`Sprite`] descriptors. Actors look up
//! ordered frame sequences by logical name and the level loader looks up tile
//! sprites by tile code.
//!
//! # Manifest Format
//!
//! ```json
//! {
//!   "sequences": {
//!     "player": [{ "tex_key": "player", "frame": 0, "width": 16, "height": 16 }]
//!   },
//!   "tiles": {
//!     ".": { "tex_key": "tiles", "frame": 0, "width": 16, "height": 16 }
//!   }
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::boundingbox::Rect;
use crate::components::sprite::Sprite;
use crate::error::AssetError;

pub const PLAYER: &str = "player";
pub const ENEMY: &str = "enemy";
pub const WEAPON: &str = "weapon";

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteStore {
    #[serde(default)]
    pub sequences: FxHashMap<String, Vec<Sprite>>,
    #[serde(default)]
    pub tiles: FxHashMap<char, Sprite>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a sprite manifest from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Frame descriptors matching the stock 16px art: three player frames,
    /// two enemy idle frames plus one extra, a thin weapon and three tiles.
    pub fn builtin(tile_size: u32) -> Self {
        let ts = tile_size as f32;
        let mut store = Self::new();
        store.insert_sequence(
            PLAYER,
            (0..3).map(|i| Sprite::new(PLAYER, i, ts, ts).with_opaque(Rect::new(4.0, 2.0, 8.0, 14.0))),
        );
        store.insert_sequence(
            ENEMY,
            (0..3).map(|i| Sprite::new(ENEMY, i, ts, ts).with_opaque(Rect::new(3.0, 1.0, 10.0, 15.0))),
        );
        store.insert_sequence(
            WEAPON,
            [Sprite::new(WEAPON, 0, 5.0, 14.0).with_opaque(Rect::new(0.0, 0.0, 5.0, 14.0))],
        );
        for (frame, code) in ['.', 'x', 's'].into_iter().enumerate() {
            store.insert_tile(code, Sprite::new("tiles", frame, ts, ts));
        }
        store
    }

    pub fn insert_sequence(&mut self, name: impl Into<String>, frames: impl IntoIterator<Item = Sprite>) {
        self.sequences.insert(name.into(), frames.into_iter().collect());
    }

    pub fn insert_tile(&mut self, code: char, sprite: Sprite) {
        self.tiles.insert(code, sprite);
    }

    /// Non-empty frame sequence registered under `name`.
    pub fn sequence(&self, name: &str) -> Result<&[Sprite], AssetError> {
        let frames = self
            .sequences
            .get(name)
            .ok_or_else(|| AssetError::MissingSequence(name.to_string()))?;
        if frames.is_empty() {
            return Err(AssetError::EmptySequence(name.to_string()));
        }
        Ok(frames)
    }

    pub fn tile(&self, code: char) -> Result<&Sprite, AssetError> {
        self.tiles.get(&code).ok_or(AssetError::MissingTileSprite(code))
    }

    /// Check that every sequence the simulation spawns with is present.
    pub fn validate(&self) -> Result<(), AssetError> {
        for name in [PLAYER, ENEMY, WEAPON] {
            self.sequence(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_is_complete() {
        let store = SpriteStore::builtin(16);
        assert!(store.validate().is_ok());
        assert_eq!(store.sequence(PLAYER).unwrap().len(), 3);
        assert!(store.tile('x').is_ok());
    }

    #[test]
    fn missing_and_empty_sequences_are_errors() {
        let mut store = SpriteStore::new();
        assert!(matches!(store.sequence(ENEMY), Err(AssetError::MissingSequence(_))));
        store.insert_sequence(ENEMY, Vec::new());
        assert!(matches!(store.sequence(ENEMY), Err(AssetError::EmptySequence(_))));
        assert!(matches!(store.tile('?'), Err(AssetError::MissingTileSprite('?'))));
    }

    #[test]
    fn manifest_parses_sequences_and_tiles() {
        let json = r#"{
            "sequences": {
                "weapon": [{ "tex_key": "sword", "width": 5, "height": 14 }]
            },
            "tiles": {
                "x": { "tex_key": "tiles", "frame": 1, "width": 16, "height": 16 }
            }
        }"#;
        let store = SpriteStore::from_json(json).unwrap();
        let weapon = &store.sequence(WEAPON).unwrap()[0];
        assert_eq!(weapon.tex_key, "sword");
        assert_eq!(weapon.frame, 0);
        assert_eq!(store.tile('x').unwrap().frame, 1);
    }
}
