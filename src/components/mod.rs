//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actor`] – player and enemy attributes
//! - [`animation`] – looping sprite-frame clock with a draw anchor
//! - [`boundingbox`] – rectangles, anchors and the collision extent of movers
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – drawable frame descriptor
//! - [`tile`] – decorative, wall and spawner tiles
//! - [`timer`] – repeating countdown used by spawners
//! - [`velocity`] – per-tick movement intent
//! - [`weapon`] – melee weapon with its thrust state machine

pub mod actor;
pub mod animation;
pub mod boundingbox;
pub mod mapposition;
pub mod sprite;
pub mod tile;
pub mod timer;
pub mod velocity;
pub mod weapon;
