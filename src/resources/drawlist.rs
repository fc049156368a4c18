//! Draw commands produced by the render system.
//!
//! The render system never talks to a graphics backend. It rebuilds this
//! list every tick, in painter's order, and the host hands it to its
//! [`Renderer`](crate::host::Renderer).

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::sprite::Sprite;

/// Painter's order bucket. Later layers are drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawLayer {
    Tiles,
    Actors,
    Weapons,
}

/// Draw `sprite` with its top-left corner at `at`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub layer: DrawLayer,
    pub sprite: Sprite,
    pub at: Vec2,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, layer: DrawLayer, sprite: Sprite, at: Vec2) {
        self.commands.push(DrawCommand { layer, sprite, at });
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}
