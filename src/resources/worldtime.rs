use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `delta` is the normalized tick time every time-dependent system consumes:
/// raw wall-clock seconds multiplied by `tick_rate`, so at the target rate a
/// tick is worth 1.0. `raw_delta` keeps the unscaled seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub raw_delta: f32,
    pub tick_rate: f32,
    pub frame_count: u64,
    /// Optional upper bound applied to raw frame seconds.
    pub max_raw_delta: Option<f32>,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            raw_delta: 0.0,
            tick_rate: 120.0,
            frame_count: 0,
            max_raw_delta: None,
        }
    }
}

impl WorldTime {
    pub fn with_tick_rate(mut self, tick_rate: f32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_max_raw_delta(mut self, max_raw_delta: Option<f32>) -> Self {
        self.max_raw_delta = max_raw_delta;
        self
    }

    /// Convert raw seconds into tick units under this clock's policy.
    pub fn scale(&self, raw_seconds: f32) -> f32 {
        let mut raw = raw_seconds;
        if let Some(max) = self.max_raw_delta {
            raw = raw.min(max);
        }
        raw.max(0.0) * self.tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_relative_to_tick_rate() {
        let time = WorldTime::default().with_tick_rate(120.0);
        assert!((time.scale(1.0 / 120.0) - 1.0).abs() < 1e-5);
        assert!((time.scale(1.0 / 60.0) - 2.0).abs() < 1e-5);
        assert_eq!(time.scale(0.0), 0.0);
    }

    #[test]
    fn negative_raw_time_counts_as_zero() {
        assert_eq!(WorldTime::default().scale(-0.5), 0.0);
    }

    #[test]
    fn negative_clamp_never_yields_negative_delta() {
        let time = WorldTime::default().with_max_raw_delta(Some(-0.1));
        assert_eq!(time.scale(0.1), 0.0);
    }

    #[test]
    fn optional_clamp_bounds_raw_seconds() {
        let time = WorldTime::default()
            .with_tick_rate(120.0)
            .with_max_raw_delta(Some(0.3));
        assert!((time.scale(2.0) - 36.0).abs() < 1e-4);
    }
}
