use bevy_ecs::prelude::*;

use crate::components::animation::AnimationClock;
use crate::components::mapposition::MapPosition;
use crate::components::tile::Tile;
use crate::components::weapon::Weapon;
use crate::resources::drawlist::{DrawLayer, DrawList};

/// Rebuild the draw list from the final state of the tick.
///
/// One command per decorative tile, one per animated entity (its current
/// frame placed by the clock's anchor) and one per weapon (its rotated sprite
/// at its bounding box), in that order so weapons end up on top.
pub fn render_system(
    mut draw_list: ResMut<DrawList>,
    tiles: Query<&Tile>,
    actors: Query<(&AnimationClock, &MapPosition)>,
    weapons: Query<&Weapon>,
) {
    draw_list.clear();

    for tile in tiles.iter() {
        draw_list.push(DrawLayer::Tiles, tile.sprite.clone(), tile.pos);
    }

    for (clock, position) in actors.iter() {
        if let (Some(frame), Some(rect)) = (clock.current_frame(), clock.draw_rect(position.pos)) {
            draw_list.push(DrawLayer::Actors, frame.clone(), rect.top_left());
        }
    }

    for weapon in weapons.iter() {
        draw_list.push(DrawLayer::Weapons, weapon.sprite.clone(), weapon.bounds.top_left());
    }
}
