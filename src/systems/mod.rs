//! Simulation systems.
//!
//! The tick pipeline runs these in a fixed order (see
//! [`build_schedule`](crate::game::build_schedule)):
//!
//! 1. [`spawner`] – count spawner timers down and release enemy batches
//! 2. [`movement`] – player and enemy velocity intent, weapon thrust
//! 3. [`collision`] – resolve velocities against walls and commit positions
//! 4. [`animation`] – advance sprite-frame clocks
//! 5. [`render`] – build the draw list
//!
//! [`time`] and [`input`] run outside the schedule, before it, to feed the
//! tick's delta and input snapshot into the world.

pub mod animation;
pub mod collision;
pub mod input;
pub mod movement;
pub mod render;
pub mod spawner;
pub mod time;
