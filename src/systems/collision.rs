//! Tile collision and position commit.
//!
//! [`tile_collision_system`] resolves every mover's [`Velocity`] against the
//! static [`CollisionTile`]s, one axis at a time:
//!
//! - the box shifted by the horizontal component only is tested against all
//!   tiles; any overlap cancels the horizontal component,
//! - the unshifted box shifted by the vertical component only is tested the
//!   same way for the vertical component.
//!
//! Blocking one axis never affects the other, which lets entities slide along
//! walls. The test is a discrete end-of-step overlap check, not a sweep, so a
//! displacement larger than a tile could tunnel through it.
//!
//! Afterwards the surviving velocity is added to [`MapPosition`] and the
//! [`BoundingBox`] is re-pinned to the new position by its anchor.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boundingbox::{BoundingBox, Rect};
use crate::components::mapposition::MapPosition;
use crate::components::tile::CollisionTile;
use crate::components::velocity::Velocity;

pub fn tile_collision_system(
    mut movers: Query<(&mut MapPosition, &mut Velocity, &mut BoundingBox)>,
    walls: Query<&CollisionTile>,
) {
    for (mut position, mut velocity, mut bbox) in movers.iter_mut() {
        let resolved = resolve_against_tiles(&bbox.rect, velocity.delta, walls.iter().map(|w| &w.rect));
        velocity.delta = resolved;
        position.pos += resolved;
        let pos = position.pos;
        bbox.place(pos);
    }
}

/// Zero each component of `delta` whose single-axis move would overlap a tile.
pub fn resolve_against_tiles<'a>(
    rect: &Rect,
    delta: Vec2,
    tiles: impl IntoIterator<Item = &'a Rect>,
) -> Vec2 {
    let moved_x = rect.translated(Vec2::new(delta.x, 0.0));
    let moved_y = rect.translated(Vec2::new(0.0, delta.y));
    let mut blocked_x = false;
    let mut blocked_y = false;
    for tile in tiles {
        blocked_x |= tile.overlaps(&moved_x);
        blocked_y |= tile.overlaps(&moved_y);
        if blocked_x && blocked_y {
            break;
        }
    }
    Vec2::new(
        if blocked_x { 0.0 } else { delta.x },
        if blocked_y { 0.0 } else { delta.y },
    )
}
