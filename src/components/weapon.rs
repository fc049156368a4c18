//! Melee weapon with a piercing thrust.
//!
//! The [`Weapon`] lives on its wielder's entity. It has two states:
//!
//! - [`ThrustState::Resting`]: the weapon anchor sits on the wielder's
//!   position and is re-synced every tick.
//! - [`ThrustState::Thrusting`]: the anchor travels along the facing angle at
//!   `thrust_speed` per unit of tick time until `max_distance` has been
//!   covered, then the weapon returns to resting with its distance cleared.
//!
//! The facing angle always points from the anchor to the pointer and the
//! drawn sprite is the base sprite rotated by the negated angle (screen y
//! grows downwards). The bounding box is pinned to the anchor by its bottom
//! center.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boundingbox::{Anchor, Rect};
use crate::components::sprite::Sprite;

/// Distance covered by one thrust before the weapon rests again.
pub const MAX_THRUST_DISTANCE: f32 = 50.0;
/// Anchor speed while thrusting, per unit of tick time.
pub const THRUST_SPEED: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrustState {
    #[default]
    Resting,
    Thrusting,
}

#[derive(Component, Debug, Clone)]
pub struct Weapon {
    /// Sprite as currently displayed (rotated towards the pointer).
    pub sprite: Sprite,
    pub base_sprite: Sprite,
    pub anchor: Vec2,
    pub bounds: Rect,
    /// Distance travelled by the current thrust.
    pub distance: f32,
    pub state: ThrustState,
    /// Facing angle in degrees, measured from +x towards +y.
    pub angle: f32,
    pub max_distance: f32,
    pub thrust_speed: f32,
}

impl Weapon {
    /// Create a resting weapon held at `wielder`.
    pub fn new(base_sprite: Sprite, wielder: Vec2) -> Self {
        Self {
            sprite: base_sprite.clone(),
            bounds: Rect::anchored(base_sprite.drawn_size(), Anchor::MidBottom, wielder),
            base_sprite,
            anchor: wielder,
            distance: 0.0,
            state: ThrustState::Resting,
            angle: 0.0,
            max_distance: MAX_THRUST_DISTANCE,
            thrust_speed: THRUST_SPEED,
        }
    }

    pub fn with_thrust(mut self, max_distance: f32, thrust_speed: f32) -> Self {
        self.max_distance = max_distance;
        self.thrust_speed = thrust_speed;
        self
    }

    pub fn is_thrusting(&self) -> bool {
        self.state == ThrustState::Thrusting
    }

    /// Begin a thrust. Returns false if one is already underway.
    pub fn start_thrust(&mut self) -> bool {
        if self.is_thrusting() {
            return false;
        }
        self.state = ThrustState::Thrusting;
        self.distance = 0.0;
        true
    }

    /// Snap the anchor onto the wielder while resting.
    pub fn rest_on(&mut self, wielder: Vec2) {
        if !self.is_thrusting() {
            self.anchor = wielder;
        }
    }

    /// Face `pointer` and rotate the displayed sprite accordingly.
    pub fn aim(&mut self, pointer: Vec2) {
        let to_pointer = pointer - self.anchor;
        self.angle = to_pointer.y.atan2(to_pointer.x).to_degrees();
        self.sprite = self.base_sprite.rotated(-self.angle);
    }

    /// Move the anchor along the facing angle.
    ///
    /// Returns true when this step completed the thrust. The weapon is then
    /// resting again and its distance is exactly 0.
    pub fn advance_thrust(&mut self, dt: f32) -> bool {
        if !self.is_thrusting() || dt <= 0.0 {
            return false;
        }
        let step = Vec2::from_angle(self.angle.to_radians()) * self.thrust_speed * dt;
        self.anchor += step;
        self.distance += step.length();
        if self.distance >= self.max_distance {
            self.state = ThrustState::Resting;
            self.distance = 0.0;
            return true;
        }
        false
    }

    /// Pin the bounding box's bottom center to the anchor.
    pub fn pin_bounds(&mut self) {
        self.bounds.set_anchor_point(Anchor::MidBottom, self.anchor);
    }
}
