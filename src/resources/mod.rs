//! ECS resources made available to systems.
//!
//! Overview
//! - `drawlist` – draw commands built by the render system each tick
//! - `gameconfig` – gameplay tunables loaded from `config.ini`
//! - `input` – per-tick input snapshot and the derived input state
//! - `rng` – seedable random source for spawning
//! - `spritestore` – frame descriptors keyed by name and tile code
//! - `worldtime` – simulation time and normalized delta
pub mod drawlist;
pub mod gameconfig;
pub mod input;
pub mod rng;
pub mod spritestore;
pub mod worldtime;
