//! Axis-aligned box collision
//!
//! Boxes are in screen space: `min` is the top-left corner, y grows downward.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes (touching edges do not collide)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_hit() {
        let player = from_xywh(0.0, 0.0, 10.0, 10.0);
        let obstacle = from_xywh(5.0, 5.0, 10.0, 10.0);
        assert!(player.overlaps(&obstacle));
    }

    #[test]
    fn test_overlap_miss() {
        let player = from_xywh(0.0, 0.0, 10.0, 10.0);
        let obstacle = from_xywh(20.0, 20.0, 10.0, 10.0);
        assert!(!player.overlaps(&obstacle));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = from_xywh(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge only
        assert!(!a.overlaps(&from_xywh(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge only (player standing next to a rock top)
        assert!(!a.overlaps(&from_xywh(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_one_axis_only_misses() {
        let a = from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&from_xywh(5.0, 30.0, 10.0, 10.0)));
        assert!(!a.overlaps(&from_xywh(30.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contained_box_hits() {
        let outer = from_xywh(0.0, 0.0, 100.0, 100.0);
        let inner = from_xywh(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..200.0, bh in 0.1f32..200.0,
        ) {
            let a = from_xywh(ax, ay, aw, ah);
            let b = from_xywh(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
