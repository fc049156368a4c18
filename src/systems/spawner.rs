//! Enemy spawner system.
//!
//! Every [`SpawnerTile`] counts tick time down. On the tick its countdown
//! expires it releases `batch_size` enemies at its position, draws the next
//! batch size and starts counting again from the full duration.
//!
//! # Behavior
//!
//! - Fires at most once per tick, however far `dt` overshoots the countdown
//! - New enemies start with zero velocity, the first two enemy frames as
//!   their idle animation and a box sized after the first frame
//! - Enemy speed is drawn per enemy from `[enemy_min_speed, enemy_max_speed)`
//!
//! Enemies are spawned through [`Commands`]; the schedule applies them before
//! the movement system runs, so they already pursue the player on the tick
//! they appear.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, error};

use crate::components::actor::Enemy;
use crate::components::animation::AnimationClock;
use crate::components::boundingbox::{Anchor, BoundingBox};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::tile::SpawnerTile;
use crate::components::velocity::Velocity;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::SimRng;
use crate::resources::spritestore::{ENEMY, SpriteStore};
use crate::resources::worldtime::WorldTime;

/// Number of leading enemy frames used by the idle animation.
const ENEMY_IDLE_FRAMES: usize = 2;

pub fn spawner_system(
    mut spawners: Query<&mut SpawnerTile>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    sprites: Res<SpriteStore>,
    mut rng: ResMut<SimRng>,
    mut commands: Commands,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    let frames = match sprites.sequence(ENEMY) {
        Ok(frames) => frames,
        Err(e) => {
            error!("Spawner cannot create enemies: {}", e);
            return;
        }
    };

    for mut spawner in spawners.iter_mut() {
        if !spawner.timer.tick(dt) {
            continue;
        }
        for _ in 0..spawner.batch_size {
            commands.spawn(enemy_bundle(spawner.pos, frames, &config, &mut rng));
        }
        debug!(
            "Spawner at ({}, {}) released {} enemies",
            spawner.pos.x, spawner.pos.y, spawner.batch_size
        );
        spawner.batch_size = rng.batch_size(config.batch_min..config.batch_max);
    }
}

/// Components of a freshly spawned enemy standing at `pos`.
pub fn enemy_bundle(
    pos: Vec2,
    frames: &[Sprite],
    config: &GameConfig,
    rng: &mut SimRng,
) -> (Enemy, AnimationClock, MapPosition, BoundingBox, Velocity) {
    let size = frames
        .first()
        .map_or(Vec2::ZERO, |frame| frame.drawn_size());
    (
        Enemy::new(
            config.enemy_hp,
            rng.speed(config.enemy_min_speed, config.enemy_max_speed),
        ),
        AnimationClock::new(
            frames.iter().take(ENEMY_IDLE_FRAMES).cloned(),
            config.enemy_frame_duration,
            Anchor::TopLeft,
        ),
        MapPosition { pos },
        BoundingBox::new(size, Anchor::TopLeft, pos),
        Velocity::default(),
    )
}
