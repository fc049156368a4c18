//! Per-tick movement intent.
//!
//! Unlike a physics velocity, [`Velocity`] is already scaled by the tick's
//! delta time: it holds the displacement the entity wants to make *this*
//! tick. The input/movement system overwrites it every tick and the collision
//! system consumes it, zeroing blocked axes before committing it to
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Displacement in world units for the current tick.
    pub delta: Vec2,
}

impl Velocity {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
        }
    }

    pub fn reset(&mut self) {
        self.delta = Vec2::ZERO;
    }
}
