//! Level loading.
//!
//! A level is a JSON array of rows. Each row holds space-separated tile
//! codes:
//!
//! ```json
//! [
//!   "x x x x",
//!   "x . s x",
//!   "x x x x"
//! ]
//! ```
//!
//! | code | entity components              |
//! |------|--------------------------------|
//! | `.`  | [`Tile`]                       |
//! | `x`  | [`Tile`] + [`CollisionTile`]   |
//! | `s`  | [`Tile`] + [`SpawnerTile`]     |
//!
//! Any other token aborts the load with [`LevelError::UnknownTileCode`]. The
//! whole grid is validated before the first entity is spawned, so a failed
//! load leaves the world untouched.

use std::path::Path;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::boundingbox::Rect;
use crate::components::sprite::Sprite;
use crate::components::tile::{CollisionTile, SpawnerTile, Tile};
use crate::error::LevelError;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::SimRng;
use crate::resources::spritestore::SpriteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCode {
    Floor,
    Wall,
    Spawner,
}

impl TileCode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "." => Some(TileCode::Floor),
            "x" => Some(TileCode::Wall),
            "s" => Some(TileCode::Spawner),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TileCode::Floor => '.',
            TileCode::Wall => 'x',
            TileCode::Spawner => 's',
        }
    }
}

/// Grid cell with its parsed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCell {
    pub row: usize,
    pub column: usize,
    pub code: TileCode,
}

/// Raw level rows as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelMap {
    pub rows: Vec<String>,
}

impl LevelMap {
    pub fn from_rows<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Self {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads level rows from a JSON file at the specified path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse every token of the grid, failing on the first unknown one.
    pub fn cells(&self) -> Result<Vec<LevelCell>, LevelError> {
        let mut cells = Vec::new();
        for (row, line) in self.rows.iter().enumerate() {
            for (column, token) in line.split_whitespace().enumerate() {
                let code = TileCode::from_token(token).ok_or_else(|| LevelError::UnknownTileCode {
                    code: token.to_string(),
                    row,
                    column,
                })?;
                cells.push(LevelCell { row, column, code });
            }
        }
        Ok(cells)
    }
}

/// What a level load produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelSummary {
    pub tiles: usize,
    pub walls: usize,
    pub spawners: usize,
}

/// Spawn the entities of `map` into `world`.
///
/// Reads [`GameConfig`] (tile size, spawner interval), [`SpriteStore`] (tile
/// sprites) and draws each spawner's first batch size from [`SimRng`].
pub fn load_level(world: &mut World, map: &LevelMap) -> Result<LevelSummary, LevelError> {
    let config = world.resource::<GameConfig>().clone();
    let tile_size = config.tile_size as f32;
    let batch = config.batch_min..config.batch_max;

    let cells: Vec<(LevelCell, Sprite)> = {
        let sprites = world.resource::<SpriteStore>();
        let mut cells = Vec::new();
        for cell in map.cells()? {
            let sprite = sprites.tile(cell.code.as_char())?.clone();
            cells.push((cell, sprite));
        }
        cells
    };

    let mut summary = LevelSummary::default();
    for (cell, sprite) in cells {
        let origin = Vec2::new(cell.column as f32 * tile_size, cell.row as f32 * tile_size);
        let tile = Tile { sprite, pos: origin };
        match cell.code {
            TileCode::Floor => {
                world.spawn(tile);
            }
            TileCode::Wall => {
                let rect = Rect::new(origin.x, origin.y, tile_size, tile_size);
                world.spawn((tile, CollisionTile { rect }));
                summary.walls += 1;
            }
            TileCode::Spawner => {
                let batch_size = world.resource_mut::<SimRng>().batch_size(batch.clone());
                world.spawn((
                    tile,
                    SpawnerTile::new(origin, config.spawn_interval_ticks(), batch_size),
                ));
                summary.spawners += 1;
            }
        }
        summary.tiles += 1;
    }

    info!(
        "Level loaded: {} tiles, {} walls, {} spawners",
        summary.tiles, summary.walls, summary.spawners
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_row_by_row() {
        let map = LevelMap::from_rows(["x . s", "x x x "]);
        let cells = map.cells().unwrap();
        assert_eq!(cells.len(), 6);
        assert_eq!(
            cells[2],
            LevelCell {
                row: 0,
                column: 2,
                code: TileCode::Spawner
            }
        );
        assert!(cells[3..].iter().all(|c| c.code == TileCode::Wall));
    }

    #[test]
    fn unknown_code_reports_position() {
        let map = LevelMap::from_rows([". .", ". ? ."]);
        match map.cells() {
            Err(LevelError::UnknownTileCode { code, row, column }) => {
                assert_eq!(code, "?");
                assert_eq!((row, column), (1, 1));
            }
            other => panic!("expected unknown tile code, got {:?}", other),
        }
    }

    #[test]
    fn multi_character_token_is_unknown() {
        let map = LevelMap::from_rows(["xx ."]);
        assert!(matches!(map.cells(), Err(LevelError::UnknownTileCode { .. })));
    }

    #[test]
    fn json_is_an_array_of_rows() {
        let map = LevelMap::from_json(r#"["x x", ". s"]"#).unwrap();
        assert_eq!(map.rows, vec!["x x".to_string(), ". s".to_string()]);
        assert!(LevelMap::from_json(r#"{"rows": 3}"#).is_err());
    }
}
