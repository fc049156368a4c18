//! Simulation setup and the per-tick loop.
//!
//! [`Simulation`] owns the ECS world (the component store) and the ordered
//! system schedule. Building one loads the level and spawns the player; each
//! [`Simulation::tick`] then runs:
//!
//! 1. quit check on the incoming snapshot
//! 2. [`update_world_time`] – raw seconds to normalized delta
//! 3. [`update_input_state`] – snapshot to [`InputState`]
//! 4. the schedule from [`build_schedule`]: spawner, movement, collision,
//!    animation, render
//!
//! Systems are chained, so each one sees the complete output of the previous
//! one and never a half-updated position.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::actor::PlayerStats;
use crate::components::animation::AnimationClock;
use crate::components::boundingbox::{Anchor, BoundingBox};
use crate::components::mapposition::MapPosition;
use crate::components::velocity::Velocity;
use crate::components::weapon::Weapon;
use crate::error::{AssetError, GameError};
use crate::host::{FramePacer, InputProvider, Renderer};
use crate::level::{LevelMap, LevelSummary, load_level};
use crate::resources::drawlist::DrawList;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputSnapshot, InputState};
use crate::resources::rng::SimRng;
use crate::resources::spritestore::{PLAYER, SpriteStore, WEAPON};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_system;
use crate::systems::collision::tile_collision_system;
use crate::systems::input::update_input_state;
use crate::systems::movement::input_movement_system;
use crate::systems::render::render_system;
use crate::systems::spawner::spawner_system;
use crate::systems::time::update_world_time;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// The tick pipeline, in its fixed order.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            spawner_system,
            input_movement_system,
            tile_collision_system,
            animation_system,
            render_system,
        )
            .chain(),
    );
    update
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
    player: Entity,
    level: LevelSummary,
}

impl Simulation {
    pub fn new(
        config: GameConfig,
        sprites: SpriteStore,
        level: &LevelMap,
        rng: SimRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        sprites.validate()?;

        let mut world = World::new();
        world.insert_resource(
            WorldTime::default()
                .with_tick_rate(config.target_fps as f32)
                .with_max_raw_delta(config.max_frame_seconds),
        );
        world.insert_resource(InputState::default());
        world.insert_resource(DrawList::default());
        world.insert_resource(rng);
        world.insert_resource(sprites);
        world.insert_resource(config);

        let level = load_level(&mut world, level)?;
        let player = spawn_player(&mut world)?;

        Ok(Self {
            world,
            schedule: build_schedule(),
            player,
            level,
        })
    }

    /// Run one tick with the given input.
    pub fn tick(&mut self, snapshot: &InputSnapshot) -> TickOutcome {
        if snapshot.quit_requested() {
            info!("Quit requested after {} ticks", self.world.resource::<WorldTime>().frame_count);
            return TickOutcome::Quit;
        }
        update_world_time(&mut self.world, snapshot.raw_seconds);
        update_input_state(&mut self.world, snapshot);

        self.schedule.run(&mut self.world);

        self.world.clear_trackers();
        TickOutcome::Continue
    }

    /// Hand the last tick's draw list to `renderer`.
    pub fn present(&self, renderer: &mut impl Renderer) {
        renderer.begin_frame();
        for command in self.world.resource::<DrawList>().iter() {
            renderer.draw(command);
        }
        renderer.end_frame();
    }

    /// Tick until quit or `max_ticks`. Returns the number of ticks run.
    ///
    /// The first tick sees 0 raw seconds; each later one sees the time the
    /// pacer measured for the frame before it.
    pub fn run(
        &mut self,
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
        pacer: &mut impl FramePacer,
        max_ticks: Option<u64>,
    ) -> u64 {
        let mut raw_seconds = 0.0;
        let mut ticks = 0;
        while max_ticks.is_none_or(|max| ticks < max) {
            let mut snapshot = input.poll();
            snapshot.raw_seconds = raw_seconds;
            if self.tick(&snapshot) == TickOutcome::Quit {
                break;
            }
            self.present(renderer);
            ticks += 1;
            raw_seconds = pacer.wait();
        }
        ticks
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn level(&self) -> LevelSummary {
        self.level
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.world.get::<MapPosition>(self.player).map(|p| p.pos)
    }
}

/// Spawn the player, holding the weapon, at the configured start point.
pub fn spawn_player(world: &mut World) -> Result<Entity, GameError> {
    let config = world.resource::<GameConfig>().clone();
    let (frames, weapon_sprite) = {
        let sprites = world.resource::<SpriteStore>();
        let weapon = sprites
            .sequence(WEAPON)?
            .first()
            .cloned()
            .ok_or_else(|| AssetError::EmptySequence(WEAPON.to_string()))?;
        (sprites.sequence(PLAYER)?.to_vec(), weapon)
    };
    let size = frames
        .first()
        .map(|frame| frame.size())
        .ok_or_else(|| AssetError::EmptySequence(PLAYER.to_string()))?;
    let start = Vec2::new(config.player_start_x, config.player_start_y);

    let player = world
        .spawn((
            MapPosition { pos: start },
            Velocity::default(),
            BoundingBox::new(size, Anchor::MidBottom, start),
            PlayerStats {
                speed: config.player_speed,
            },
            AnimationClock::new(frames, config.player_frame_duration, Anchor::MidBottom),
            Weapon::new(weapon_sprite, start)
                .with_thrust(config.weapon_max_distance, config.weapon_thrust_speed),
        ))
        .id();
    info!("Player spawned at ({}, {})", start.x, start.y);
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(sprites: SpriteStore) -> World {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        world.insert_resource(sprites);
        world
    }

    #[test]
    fn player_needs_player_and_weapon_frames() {
        let mut sprites = SpriteStore::builtin(16);
        sprites.insert_sequence(WEAPON, Vec::new());
        let mut world = world_with(sprites);
        assert!(matches!(
            spawn_player(&mut world),
            Err(GameError::Asset(AssetError::EmptySequence(name))) if name == WEAPON
        ));

        let mut sprites = SpriteStore::builtin(16);
        sprites.sequences.remove(PLAYER);
        let mut world = world_with(sprites);
        assert!(matches!(
            spawn_player(&mut world),
            Err(GameError::Asset(AssetError::MissingSequence(_)))
        ));
    }

    #[test]
    fn player_starts_at_configured_point_with_resting_weapon() {
        let mut world = world_with(SpriteStore::builtin(16));
        let player = spawn_player(&mut world).unwrap();
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vec2::new(70.0, 50.0));
        let weapon = world.get::<Weapon>(player).unwrap();
        assert!(!weapon.is_thrusting());
        assert_eq!(weapon.anchor, Vec2::new(70.0, 50.0));
        let bbox = world.get::<BoundingBox>(player).unwrap();
        assert_eq!(bbox.anchor_point(), Vec2::new(70.0, 50.0));
    }
}
