//! Axis-aligned boxes and anchors.
//!
//! [`Rect`] is a plain world-space rectangle (top-left corner + size).
//! [`Anchor`] names the reference point of a rectangle that is aligned to an
//! entity's [`MapPosition`](super::mapposition::MapPosition), and
//! [`BoundingBox`] is the collision/render extent of an entity, kept pinned to
//! its position through that anchor.
//!
//! Overlap tests are strict: rectangles that only share an edge do not
//! overlap, so an entity can slide flush along a wall.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Returns (min, max) corners. Handles negative size by normalizing.
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let p0 = self.top_left();
        let p1 = p0 + self.size();
        (p0.min(p1), p0.max(p1))
    }

    /// Copy of this rectangle moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Strict AABB vs AABB overlap test.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (min_a, max_a) = self.aabb();
        let (min_b, max_b) = other.aabb();
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// World position of the given anchor point of this rectangle.
    pub fn anchor_point(&self, anchor: Anchor) -> Vec2 {
        self.top_left() + anchor.offset_in(self.size())
    }

    /// Move the rectangle so that its `anchor` point lands on `point`.
    pub fn set_anchor_point(&mut self, anchor: Anchor, point: Vec2) {
        let top_left = point - anchor.offset_in(self.size());
        self.x = top_left.x;
        self.y = top_left.y;
    }

    /// Rectangle of `size` whose `anchor` point sits at `point`.
    pub fn anchored(size: Vec2, anchor: Anchor, point: Vec2) -> Self {
        let mut rect = Self::new(0.0, 0.0, size.x, size.y);
        rect.set_anchor_point(anchor, point);
        rect
    }
}

/// Named reference point of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    TopLeft,
    /// Bottom edge, horizontally centered.
    MidBottom,
}

impl Anchor {
    /// Offset of this anchor from the top-left corner of a box of `size`.
    pub fn offset_in(self, size: Vec2) -> Vec2 {
        match self {
            Anchor::TopLeft => Vec2::ZERO,
            Anchor::MidBottom => Vec2::new(size.x * 0.5, size.y),
        }
    }
}

/// Collision extent of a moving entity, pinned to its position by `anchor`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub rect: Rect,
    pub anchor: Anchor,
}

impl BoundingBox {
    /// Create a box of `size` whose `anchor` point sits at `position`.
    pub fn new(size: Vec2, anchor: Anchor, position: Vec2) -> Self {
        Self {
            rect: Rect::anchored(size, anchor, position),
            anchor,
        }
    }

    /// Re-pin the box so its anchor point equals `position`.
    pub fn place(&mut self, position: Vec2) {
        self.rect.set_anchor_point(self.anchor, position);
    }

    pub fn anchor_point(&self) -> Vec2 {
        self.rect.anchor_point(self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict_on_shared_edges() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        let touching = Rect::new(16.0, 0.0, 16.0, 16.0);
        let inside = Rect::new(15.0, 15.0, 4.0, 4.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn negative_size_is_normalized() {
        let a = Rect::new(10.0, 10.0, -10.0, -10.0);
        let b = Rect::new(5.0, 5.0, 1.0, 1.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn mid_bottom_anchor_places_box_above_point() {
        let bbox = BoundingBox::new(Vec2::new(10.0, 20.0), Anchor::MidBottom, Vec2::new(50.0, 50.0));
        assert_eq!(bbox.rect, Rect::new(45.0, 30.0, 10.0, 20.0));
        assert_eq!(bbox.anchor_point(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn place_moves_without_resizing() {
        let mut bbox = BoundingBox::new(Vec2::new(8.0, 8.0), Anchor::MidBottom, Vec2::ZERO);
        bbox.place(Vec2::new(100.0, -4.0));
        assert_eq!(bbox.rect, Rect::new(96.0, -12.0, 8.0, 8.0));
    }
}
