//! Bounding-box overlap detection between two karts.

use crate::types::{Vec2, Vehicle};

/// Push direction used when both centers coincide exactly.
pub const COINCIDENT_FALLBACK: Vec2 = Vec2::new(1.0, 0.0);

/// An overlap between two karts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Vector from the second kart's center to the first kart's center
    pub separation: Vec2,
    /// Unit push direction for the first kart
    pub normal: Vec2,
}

pub struct CollisionDetector;

impl CollisionDetector {
    /// Test two karts for overlap.
    ///
    /// The boxes overlap when the center distance on both axes is strictly
    /// below the sum of the half sizes on that axis.
    pub fn detect(first: &Vehicle, second: &Vehicle) -> Option<Contact> {
        let a = first.bounds();
        let b = second.bounds();
        let separation = a.center() - b.center();
        let reach = a.half_extents() + b.half_extents();

        if separation.x.abs() < reach.x && separation.y.abs() < reach.y {
            Some(Contact {
                separation,
                normal: separation.normalized_or(COINCIDENT_FALLBACK),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::constants;

    fn kart_at(id: usize, x: f64, y: f64) -> Vehicle {
        Vehicle::new(id, Vec2::new(x, y), 32, 16)
    }

    #[test]
    fn test_separated_karts() {
        let a = kart_at(0, 0.0, 0.0);
        let b = kart_at(1, 100.0, 0.0);
        assert!(CollisionDetector::detect(&a, &b).is_none());
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = kart_at(0, 0.0, 0.0);
        // Overlaps on x, apart on y
        let b = kart_at(1, 10.0, 40.0);
        assert!(CollisionDetector::detect(&a, &b).is_none());
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = kart_at(0, 0.0, 0.0);
        let b = kart_at(1, 32.0, 0.0);
        assert!(
            CollisionDetector::detect(&a, &b).is_none(),
            "Strict comparison: edge contact is not an overlap"
        );
    }

    #[test]
    fn test_overlap_normal_points_from_second_to_first() {
        let a = kart_at(0, 20.0, 0.0);
        let b = kart_at(1, 0.0, 0.0);

        let contact = CollisionDetector::detect(&a, &b).expect("Should overlap");
        assert_eq!(contact.separation, Vec2::new(20.0, 0.0));
        assert!((contact.normal.x - 1.0).abs() < constants::EPSILON);
        assert!(contact.normal.y.abs() < constants::EPSILON);
    }

    #[test]
    fn test_different_sizes_use_centers() {
        let a = Vehicle::new(0, Vec2::new(0.0, 0.0), 64, 64);
        let b = Vehicle::new(1, Vec2::new(60.0, 60.0), 8, 8);
        // centers (32,32) and (64,64): 32 < 32 + 4 on both axes
        let contact = CollisionDetector::detect(&a, &b).expect("Should overlap");
        assert!(contact.normal.x < 0.0 && contact.normal.y < 0.0);
    }

    #[test]
    fn test_coincident_centers_use_fallback() {
        let a = kart_at(0, 5.0, 5.0);
        let b = kart_at(1, 5.0, 5.0);

        let contact = CollisionDetector::detect(&a, &b).expect("Should overlap");
        assert_eq!(contact.separation, Vec2::ZERO);
        assert_eq!(contact.normal, COINCIDENT_FALLBACK);
    }
}
