use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::boundingbox::{Anchor, Rect};
use crate::components::sprite::Sprite;

/// Looping sprite animation driven by tick time.
///
/// `frame_duration` is expressed in the same normalized units as
/// [`WorldTime::delta`](crate::resources::worldtime::WorldTime). The clock
/// never stops: after the last frame it wraps to frame 0. Leftover time is
/// carried into the next frame, so the frame shown only depends on the total
/// time accumulated, not on how it was split across ticks.
#[derive(Debug, Clone, Component)]
pub struct AnimationClock {
    pub frames: SmallVec<[Sprite; 4]>,
    pub frame_duration: f32,
    pub elapsed: f32,
    pub frame_index: usize,
    /// Which point of the frame is placed on the entity position when drawn.
    pub anchor: Anchor,
}

impl AnimationClock {
    pub fn new(frames: impl IntoIterator<Item = Sprite>, frame_duration: f32, anchor: Anchor) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            frame_duration,
            elapsed: 0.0,
            frame_index: 0,
            anchor,
        }
    }

    /// Accumulate `dt` and step through as many frames as it covers.
    ///
    /// Returns how many frame changes happened.
    pub fn advance(&mut self, dt: f32) -> usize {
        if dt <= 0.0 || self.frames.is_empty() || self.frame_duration <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut steps = 0;
        while self.elapsed >= self.frame_duration {
            self.elapsed -= self.frame_duration;
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            steps += 1;
        }
        steps
    }

    pub fn current_frame(&self) -> Option<&Sprite> {
        self.frames.get(self.frame_index)
    }

    /// Screen rectangle the current frame occupies when anchored at `position`.
    pub fn draw_rect(&self, position: Vec2) -> Option<Rect> {
        self.current_frame()
            .map(|frame| Rect::anchored(frame.size(), self.anchor, position))
    }
}
