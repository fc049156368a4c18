//! Animation system.
//!
//! [`animation_system`] advances every positioned entity's
//! [`AnimationClock`] by the tick's normalized delta. Frame selection and
//! wrap-around live on the component; where the frame is drawn is decided by
//! the clock's anchor when the render system builds the draw list.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationClock;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

/// Advance animation clocks.
///
/// Contract
/// - Reads [`WorldTime`] for the normalized delta.
/// - Mutates [`AnimationClock`] elapsed time and frame index only.
pub fn animation_system(
    mut query: Query<&mut AnimationClock, With<MapPosition>>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for mut clock in query.iter_mut() {
        clock.advance(dt);
    }
}
