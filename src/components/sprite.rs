use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::boundingbox::Rect;

/// A drawable frame, identified by a texture key and a frame index inside that texture.
///
/// The simulation never touches pixels: frames are descriptors handed out by the
/// [`SpriteStore`](crate::resources::spritestore::SpriteStore) and passed back to the
/// renderer in draw commands. `opaque` is the bounding rectangle of the frame's
/// non-transparent pixels (relative to its top-left) and is what collision boxes are
/// derived from. `rotation` is in degrees, counter-clockwise on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub tex_key: String,
    #[serde(default)]
    pub frame: usize,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub opaque: Option<Rect>,
    #[serde(default)]
    pub rotation: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, frame: usize, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame,
            width,
            height,
            opaque: None,
            rotation: 0.0,
        }
    }

    pub fn with_opaque(mut self, opaque: Rect) -> Self {
        self.opaque = Some(opaque);
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Size of the drawn (non-transparent) part of the frame.
    pub fn drawn_size(&self) -> Vec2 {
        self.opaque.map_or(self.size(), |r| r.size())
    }

    /// Copy of this sprite rotated by `degrees`.
    ///
    /// Rotation is absolute: rotating an already rotated sprite replaces the angle.
    pub fn rotated(&self, degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..self.clone()
        }
    }
}
