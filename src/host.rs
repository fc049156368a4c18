//! Boundary with the outside world.
//!
//! The simulation only needs three things from its host: an input snapshot
//! per tick ([`InputProvider`]), somewhere to send draw commands
//! ([`Renderer`]) and a frame pacer that caps the tick rate and reports how
//! long the frame took ([`FramePacer`]). A windowed frontend implements these
//! over its platform layer; the implementations here run headless.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use glam::Vec2;
use log::debug;
use rustc_hash::FxHashMap;

use crate::resources::drawlist::{DrawCommand, DrawLayer};
use crate::resources::input::{DirectionKeys, InputEvent, InputSnapshot};

pub trait InputProvider {
    /// Keys, pointer and events for the coming tick. `raw_seconds` is filled
    /// in by the caller from its pacer.
    fn poll(&mut self) -> InputSnapshot;
}

pub trait Renderer {
    fn begin_frame(&mut self) {}
    fn draw(&mut self, command: &DrawCommand);
    fn end_frame(&mut self) {}
}

pub trait FramePacer {
    /// Block until the next tick is due and return the seconds since the previous call.
    fn wait(&mut self) -> f32;
}

/// Pacer for deterministic runs: never sleeps, every frame lasts `seconds`.
#[derive(Debug, Clone, Copy)]
pub struct FixedPacer {
    pub seconds: f32,
}

impl FixedPacer {
    pub fn from_fps(fps: u32) -> Self {
        Self {
            seconds: 1.0 / fps.max(1) as f32,
        }
    }
}

impl FramePacer for FixedPacer {
    fn wait(&mut self) -> f32 {
        self.seconds
    }
}

/// Wall-clock pacer that sleeps off the rest of each frame budget.
#[derive(Debug)]
pub struct RealtimePacer {
    frame: Duration,
    last: Instant,
}

impl RealtimePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }
}

impl FramePacer for RealtimePacer {
    fn wait(&mut self) -> f32 {
        let spent = self.last.elapsed();
        if spent < self.frame {
            std::thread::sleep(self.frame - spent);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }
}

/// Replays prepared snapshots, then asks to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// A player wandering around its start point, sweeping the pointer in a
    /// circle and thrusting every `click_every` ticks.
    pub fn wander(ticks: u64, center: Vec2, click_every: u64) -> Self {
        let click_every = click_every.max(1);
        let frames = (0..ticks).map(|tick| {
            let phase = (tick / 120) % 4;
            let keys = DirectionKeys {
                right: phase == 0,
                down: phase == 1 || phase == 0,
                left: phase == 2,
                up: phase == 3,
            };
            let angle = tick as f32 * 0.05;
            let pointer = center + Vec2::from_angle(angle) * 40.0;
            let mut snapshot = InputSnapshot::default()
                .with_keys(keys)
                .with_pointer(pointer.x, pointer.y);
            if tick % click_every == 0 {
                snapshot = snapshot.with_event(InputEvent::PrimaryClick);
            }
            snapshot
        });
        Self::new(frames)
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        self.frames
            .pop_front()
            .unwrap_or_else(|| InputSnapshot::default().with_event(InputEvent::Quit))
    }
}

/// Renderer that only counts what it is asked to draw.
#[derive(Debug, Clone, Default)]
pub struct TallyRenderer {
    pub frames: u64,
    pub last_frame: FxHashMap<DrawLayer, usize>,
    current: FxHashMap<DrawLayer, usize>,
    /// Layers in the order they were first drawn during the last frame.
    pub last_order: Vec<DrawLayer>,
    order: Vec<DrawLayer>,
}

impl TallyRenderer {
    pub fn count(&self, layer: DrawLayer) -> usize {
        self.last_frame.get(&layer).copied().unwrap_or(0)
    }
}

impl Renderer for TallyRenderer {
    fn begin_frame(&mut self) {
        self.current.clear();
        self.order.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        *self.current.entry(command.layer).or_insert(0) += 1;
        if self.order.last() != Some(&command.layer) {
            self.order.push(command.layer);
        }
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        self.last_frame = std::mem::take(&mut self.current);
        self.last_order = std::mem::take(&mut self.order);
        debug!(
            "Frame {}: {} tiles, {} actors, {} weapons",
            self.frames,
            self.count(DrawLayer::Tiles),
            self.count(DrawLayer::Actors),
            self.count(DrawLayer::Weapons)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::Sprite;

    #[test]
    fn scripted_input_quits_when_exhausted() {
        let mut input = ScriptedInput::new([InputSnapshot::default()]);
        assert!(!input.poll().quit_requested());
        assert!(input.poll().quit_requested());
    }

    #[test]
    fn wander_clicks_on_schedule() {
        let mut input = ScriptedInput::wander(10, Vec2::ZERO, 5);
        let clicks: Vec<bool> = (0..10)
            .map(|_| input.poll().events.contains(&InputEvent::PrimaryClick))
            .collect();
        assert_eq!(clicks.iter().filter(|c| **c).count(), 2);
        assert!(clicks[0] && clicks[5]);
    }

    #[test]
    fn tally_tracks_layer_order() {
        let mut renderer = TallyRenderer::default();
        let sprite = Sprite::new("t", 0, 1.0, 1.0);
        renderer.begin_frame();
        for layer in [DrawLayer::Tiles, DrawLayer::Tiles, DrawLayer::Actors, DrawLayer::Weapons] {
            renderer.draw(&DrawCommand {
                layer,
                sprite: sprite.clone(),
                at: Vec2::ZERO,
            });
        }
        renderer.end_frame();
        assert_eq!(renderer.count(DrawLayer::Tiles), 2);
        assert_eq!(
            renderer.last_order,
            vec![DrawLayer::Tiles, DrawLayer::Actors, DrawLayer::Weapons]
        );
    }

    #[test]
    fn fixed_pacer_reports_frame_time() {
        let mut pacer = FixedPacer::from_fps(120);
        assert!((pacer.wait() - 1.0 / 120.0).abs() < 1e-7);
    }
}
