//! Input and movement intent.
//!
//! [`input_movement_system`] fills every actor's [`Velocity`] for the tick
//! and drives the player's weapon:
//!
//! 1. Player: directional keys become a displacement of `speed * dt` per
//!    axis. Diagonals are scaled by `1/√2` so they cover the same distance as
//!    straight moves.
//! 2. Weapon: a click edge starts a thrust; a resting weapon follows its
//!    wielder; the weapon always faces the pointer; a thrusting weapon moves
//!    along its facing angle until it has covered its maximum distance.
//! 3. Enemies: each heads straight for the last known player position at its
//!    own speed. Walls are left to the collision system.
//!
//! The per-tick inputs are gathered into a [`MovementContext`] and handed to
//! each step explicitly. The player position seen this tick is kept in the
//! system's [`Local`] so enemies keep chasing the last known spot if the
//! player disappears.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::actor::{Enemy, PlayerStats};
use crate::components::mapposition::MapPosition;
use crate::components::velocity::Velocity;
use crate::components::weapon::Weapon;
use crate::resources::input::{DirectionKeys, InputState};
use crate::resources::worldtime::WorldTime;

/// Inputs of one movement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementContext {
    pub dt: f32,
    pub keys: DirectionKeys,
    pub pointer: Vec2,
    pub clicked: bool,
    /// Where enemies should head; `None` until a player has been seen.
    pub player_position: Option<Vec2>,
}

pub fn input_movement_system(
    mut players: Query<
        (&MapPosition, &mut Velocity, &PlayerStats, Option<&mut Weapon>),
        Without<Enemy>,
    >,
    mut enemies: Query<(&MapPosition, &mut Velocity, &Enemy), Without<PlayerStats>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut last_player: Local<Option<Vec2>>,
) {
    let mut ctx = MovementContext {
        dt: time.delta,
        keys: input.keys,
        pointer: input.pointer,
        clicked: input.primary_click,
        player_position: *last_player,
    };

    for (position, mut velocity, stats, weapon) in players.iter_mut() {
        velocity.delta = player_intent(ctx.keys, stats.speed, ctx.dt);
        if let Some(mut weapon) = weapon {
            drive_weapon(&mut weapon, position.pos, &ctx);
        }
        ctx.player_position = Some(position.pos);
    }

    for (position, mut velocity, enemy) in enemies.iter_mut() {
        velocity.delta = match ctx.player_position {
            Some(target) => homing_intent(position.pos, target, enemy.speed, ctx.dt),
            None => Vec2::ZERO,
        };
    }

    *last_player = ctx.player_position;
}

/// Displacement requested by the held direction keys.
pub fn player_intent(keys: DirectionKeys, speed: f32, dt: f32) -> Vec2 {
    let step = speed * dt;
    let mut delta = Vec2::ZERO;
    if keys.up {
        delta.y -= step;
    }
    if keys.down {
        delta.y += step;
    }
    if keys.right {
        delta.x += step;
    }
    if keys.left {
        delta.x -= step;
    }

    // Normalize diagonal movement
    if delta.x != 0.0 && delta.y != 0.0 {
        delta *= std::f32::consts::FRAC_1_SQRT_2;
    }
    delta
}

/// Displacement of length `speed * dt` from `from` towards `target`.
pub fn homing_intent(from: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    (target - from).normalize_or_zero() * speed * dt
}

/// Advance the weapon's thrust state machine for one tick.
pub fn drive_weapon(weapon: &mut Weapon, wielder: Vec2, ctx: &MovementContext) {
    if ctx.clicked && weapon.start_thrust() {
        debug!("Thrust started towards ({}, {})", ctx.pointer.x, ctx.pointer.y);
    }
    weapon.rest_on(wielder);
    weapon.aim(ctx.pointer);
    if weapon.advance_thrust(ctx.dt) {
        debug!("Thrust finished at ({}, {})", weapon.anchor.x, weapon.anchor.y);
        // Back in the wielder's hand on the same tick.
        weapon.rest_on(wielder);
        weapon.aim(ctx.pointer);
    }
    weapon.pin_bounds();
}
