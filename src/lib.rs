//! Swordspawn library.
//!
//! A tick-based 2D action simulation on top of `bevy_ecs`: a tile level with
//! walls and enemy spawners, a player with a thrusting sword, and enemies
//! that chase the player. Windowing, asset decoding, input polling and
//! drawing stay with the host and are reached through [`host`].

pub mod components;
pub mod error;
pub mod game;
pub mod host;
pub mod level;
pub mod resources;
pub mod systems;
