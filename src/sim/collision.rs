//! Axis-aligned collision primitives
//!
//! Everything in the arena is a rectangle: 50x50 agents, 20x20 powerup
//! drops, and a 10x10 box centered on each bullet.

use glam::Vec2;

/// An axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box given its top-left corner
    pub fn square(min: Vec2, side: f32) -> Self {
        Self::new(min, Vec2::splat(side))
    }

    /// Square box centered on a point (bullet hitboxes)
    pub fn centered_square(center: Vec2, side: f32) -> Self {
        Self::new(center - Vec2::splat(side / 2.0), Vec2::splat(side))
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Closed-interval overlap test, matching pygame's `Rect.colliderect`
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.min.x + other.size.x
            && other.min.x < self.min.x + self.size.x
            && self.min.y < other.min.y + other.size.y
            && other.min.y < self.min.y + self.size.y
    }
}

/// True while a point is inside the arena, bounds inclusive
pub fn point_in_arena(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x >= 0.0 && pos.x <= width && pos.y >= 0.0 && pos.y <= height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 50.0);
        let b = Aabb::square(Vec2::new(40.0, 40.0), 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separated_boxes() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 50.0);
        let b = Aabb::square(Vec2::new(100.0, 0.0), 50.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 50.0);
        let b = Aabb::square(Vec2::new(50.0, 0.0), 50.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_centered_square() {
        let b = Aabb::centered_square(Vec2::new(100.0, 100.0), 10.0);
        assert_eq!(b.min, Vec2::new(95.0, 95.0));
        assert_eq!(b.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_bullet_box_against_agent() {
        let agent = Aabb::square(Vec2::new(200.0, 200.0), 50.0);
        // Bullet center just inside the agent's left edge
        let hit = Aabb::centered_square(Vec2::new(204.0, 225.0), 10.0);
        assert!(hit.intersects(&agent));
        // Bullet center 6px left of the edge - its 10x10 box stops short
        let miss = Aabb::centered_square(Vec2::new(194.0, 225.0), 10.0);
        assert!(!miss.intersects(&agent));
    }

    #[test]
    fn test_point_in_arena() {
        assert!(point_in_arena(Vec2::new(0.0, 0.0), 800.0, 600.0));
        assert!(point_in_arena(Vec2::new(800.0, 600.0), 800.0, 600.0));
        assert!(!point_in_arena(Vec2::new(-0.1, 300.0), 800.0, 600.0));
        assert!(!point_in_arena(Vec2::new(400.0, 600.1), 800.0, 600.0));
    }
}
