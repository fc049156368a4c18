//! Static level tiles.
//!
//! All three components are created by the level loader and never move.
//! A wall cell carries both a [`Tile`] and a [`CollisionTile`]; a spawner cell
//! carries a [`Tile`] and a [`SpawnerTile`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boundingbox::Rect;
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;

/// Decorative tile, drawn under everything else.
#[derive(Component, Clone, Debug)]
pub struct Tile {
    pub sprite: Sprite,
    /// Top-left corner in world space.
    pub pos: Vec2,
}

/// Static obstacle for moving entities.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CollisionTile {
    pub rect: Rect,
}

/// Periodically releases a batch of enemies at its position.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SpawnerTile {
    pub pos: Vec2,
    pub timer: Countdown,
    /// Size of the next batch; redrawn after every release.
    pub batch_size: usize,
}

impl SpawnerTile {
    pub fn new(pos: Vec2, duration: f32, batch_size: usize) -> Self {
        Self {
            pos,
            timer: Countdown::new(duration),
            batch_size,
        }
    }
}
