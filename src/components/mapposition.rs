use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Authoritative world-space location of an entity.
///
/// Only the collision system commits changes to it, after resolving the
/// entity's [`Velocity`](super::velocity::Velocity) against the level walls.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
