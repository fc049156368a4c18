//! Input update.
//!
//! [`update_input_state`] copies the host's [`InputSnapshot`] into the
//! [`InputState`] resource at the start of every tick.
use bevy_ecs::prelude::*;

use crate::resources::input::{InputEvent, InputSnapshot, InputState};

/// Write held keys, pointer and the click edge for this tick.
pub fn update_input_state(world: &mut World, snapshot: &InputSnapshot) {
    let mut input = world.resource_mut::<InputState>();
    input.keys = snapshot.keys;
    input.pointer = snapshot.pointer;
    input.primary_click = snapshot.events.contains(&InputEvent::PrimaryClick);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::DirectionKeys;

    #[test]
    fn click_is_only_set_on_its_tick() {
        let mut world = World::new();
        world.insert_resource(InputState::default());

        let keys = DirectionKeys {
            right: true,
            ..DirectionKeys::none()
        };
        let clicked = InputSnapshot::new(0.01)
            .with_keys(keys)
            .with_pointer(10.0, 20.0)
            .with_event(InputEvent::PrimaryClick);
        update_input_state(&mut world, &clicked);
        assert!(world.resource::<InputState>().primary_click);
        assert!(world.resource::<InputState>().keys.right);

        update_input_state(&mut world, &InputSnapshot::new(0.01).with_keys(keys));
        let input = world.resource::<InputState>();
        assert!(!input.primary_click);
        assert!(input.keys.right);
    }
}
