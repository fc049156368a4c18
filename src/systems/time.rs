//! Time update.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, before the schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Turn raw frame seconds into normalized tick time.
///
/// `raw_seconds` is the unscaled wall-clock time since the previous tick.
/// It is scaled by `tick_rate` so that a frame at the target rate is worth
/// 1.0; 0 on the first tick makes every system a no-op.
pub fn update_world_time(world: &mut World, raw_seconds: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = wt.scale(raw_seconds);
    wt.raw_delta = raw_seconds.max(0.0);
    wt.delta = scaled_dt;
    wt.elapsed += scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_scaled_time() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_tick_rate(100.0));
        update_world_time(&mut world, 0.0);
        update_world_time(&mut world, 0.02);
        let wt = world.resource::<WorldTime>();
        assert!((wt.delta - 2.0).abs() < 1e-5);
        assert!((wt.elapsed - 2.0).abs() < 1e-5);
        assert_eq!(wt.frame_count, 2);
    }
}
