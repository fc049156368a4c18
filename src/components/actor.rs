//! Gameplay attributes of the moving actors.
//!
//! - [`PlayerStats`] marks the player entity and holds its tunables.
//! - [`Enemy`] marks pursuing enemies. `hp` is carried as data only; nothing
//!   in the simulation reads or changes it yet.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlayerStats {
    /// Movement per unit of tick time along one axis.
    pub speed: f32,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub hp: i32,
    pub speed: f32,
}

impl Enemy {
    pub fn new(hp: i32, speed: f32) -> Self {
        Self { hp, speed }
    }
}
