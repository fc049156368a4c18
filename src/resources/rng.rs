//! Seedable random source shared by spawning code.
//!
//! Batch sizes and enemy speeds come from here so a run can be reproduced by
//! fixing the seed.

use std::ops::Range;

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug)]
pub struct SimRng(pub Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(Rng::new())
    }
}

impl SimRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    /// Uniform integer in `range` (end exclusive).
    pub fn batch_size(&mut self, range: Range<usize>) -> usize {
        self.0.usize(range)
    }

    /// Uniform float in `[min, max)`.
    pub fn speed(&mut self, min: f32, max: f32) -> f32 {
        min + self.0.f32() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::with_seed(7);
        let mut b = SimRng::with_seed(7);
        for _ in 0..32 {
            assert_eq!(a.batch_size(2..6), b.batch_size(2..6));
            assert_eq!(a.speed(0.3, 0.5), b.speed(0.3, 0.5));
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = SimRng::with_seed(42);
        for _ in 0..1000 {
            let n = rng.batch_size(2..6);
            assert!((2..6).contains(&n));
            let s = rng.speed(0.3, 0.5);
            assert!((0.3..=0.5).contains(&s));
        }
    }
}
