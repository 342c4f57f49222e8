use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangular collider attached to an entity position.
///
/// The AABB spans from `position + offset` to `position + offset + size`.
/// Entities anchored at their center use [`BoxCollider::centered`], which
/// sets the offset to minus half the size.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with the given size and a zero offset.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Create a BoxCollider centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(-width * 0.5, -height * 0.5),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_from_centered_collider() {
        let collider = BoxCollider::centered(10.0, 20.0);
        let (min, max) = collider.aabb(Vector2::new(100.0, 200.0));
        assert_eq!(min, Vector2::new(95.0, 190.0));
        assert_eq!(max, Vector2::new(105.0, 210.0));
    }

    #[test]
    fn aabb_normalizes_negative_size() {
        let collider = BoxCollider {
            size: Vector2::new(-10.0, -10.0),
            offset: Vector2::zero(),
        };
        let (min, max) = collider.aabb(Vector2::new(0.0, 0.0));
        assert_eq!(min, Vector2::new(-10.0, -10.0));
        assert_eq!(max, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn overlapping_boxes_are_detected() {
        let a = BoxCollider::centered(10.0, 10.0);
        let b = BoxCollider::centered(10.0, 10.0);
        assert!(a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(8.0, 8.0)));
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(20.0, 0.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(10.0, 0.0)));
    }

    #[test]
    fn contains_point_checks_bounds() {
        let collider = BoxCollider::centered(10.0, 10.0);
        let pos = Vector2::new(50.0, 50.0);
        assert!(collider.contains_point(pos, Vector2::new(50.0, 50.0)));
        assert!(collider.contains_point(pos, Vector2::new(45.0, 45.0)));
        assert!(!collider.contains_point(pos, Vector2::new(56.0, 50.0)));
    }
}
