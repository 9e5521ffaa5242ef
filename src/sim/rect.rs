//! Axis-aligned rectangles
//!
//! Every hitbox in the game is an AABB in arena space: top-left corner plus
//! width/height, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` anchored at `pos`
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    /// Smallest rect containing both points
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grow by `amount` on every side
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.w + amount * 2.0,
            self.h + amount * 2.0,
        )
    }

    /// Strict overlap test: rects that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Inclusive point test (used for button hit-testing)
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(20.0, 0.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let r = Rect::new(540.0, 300.0, 200.0, 50.0);
        assert!(r.contains_point(Vec2::new(540.0, 300.0)));
        assert!(r.contains_point(Vec2::new(740.0, 350.0)));
        assert!(!r.contains_point(Vec2::new(741.0, 350.0)));
    }

    #[test]
    fn test_from_corners_orders_points() {
        let r = Rect::from_corners(Vec2::new(10.0, 5.0), Vec2::new(2.0, 8.0));
        assert_eq!(r, Rect::new(2.0, 5.0, 8.0, 3.0));
    }
}
