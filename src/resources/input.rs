//! Per-tick input resource.
//!
//! [`InputSnapshot`] is what the input/display provider hands over every tick:
//! raw frame time, held direction keys, pointer position and the discrete
//! events that happened since the last tick. The
//! [`update_input_state`](crate::systems::input::update_input_state) function
//! folds it into the [`InputState`] resource read by the movement system.
//! Clicks are edges: `primary_click` is only true on the tick the click event
//! arrived, never while the button is merely held.
use bevy_ecs::prelude::*;
use glam::Vec2;

/// Discrete events delivered by the input provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PrimaryClick,
}

/// Held state of the four movement directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Everything the core reads from the outside world for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Wall-clock seconds since the previous tick.
    pub raw_seconds: f32,
    pub keys: DirectionKeys,
    /// Pointer position in world coordinates.
    pub pointer: Vec2,
    pub events: Vec<InputEvent>,
}

impl InputSnapshot {
    pub fn new(raw_seconds: f32) -> Self {
        Self {
            raw_seconds,
            ..Default::default()
        }
    }

    pub fn with_keys(mut self, keys: DirectionKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Vec2::new(x, y);
        self
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}

/// Resource capturing the input relevant to gameplay for the current tick.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub keys: DirectionKeys,
    pub pointer: Vec2,
    /// A primary click arrived this tick.
    pub primary_click: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_all_inactive() {
        let input = InputState::default();
        assert_eq!(input.keys, DirectionKeys::none());
        assert!(!input.primary_click);
        assert_eq!(input.pointer, Vec2::ZERO);
    }

    #[test]
    fn snapshot_detects_quit() {
        let snapshot = InputSnapshot::new(0.01).with_event(InputEvent::PrimaryClick);
        assert!(!snapshot.quit_requested());
        assert!(snapshot.with_event(InputEvent::Quit).quit_requested());
    }
}
