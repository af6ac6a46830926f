//! Geometry kernel
//!
//! Pure functions over points in the normalized play field. No state, no
//! tolerances: comparisons are exact on the f32 inputs.

use std::cmp::Ordering;

use crate::Point;

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Point, p2: Point) -> f32 {
    p1.distance(p2)
}

/// Turn direction of the ordered triple `(p, q, r)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of `(p, q, r)` from the sign of the cross product
///
/// Uses the screen convention (y grows downward), so a positive value is
/// reported as clockwise.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let value = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    match value.partial_cmp(&0.0) {
        Some(Ordering::Greater) => Orientation::Clockwise,
        Some(Ordering::Less) => Orientation::CounterClockwise,
        _ => Orientation::Collinear,
    }
}

/// Check whether segments `p1-q1` and `p2-q2` cross
///
/// Segments that share an endpoint never cross: two lines meeting at a star
/// are legal. Otherwise this is the plain four-orientation test, so a
/// segment whose endpoint lies on the interior of the other counts as a
/// crossing.
///
/// Known limitation: collinear overlapping segments are reported as
/// non-crossing (all four orientations are `Collinear`).
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    if p1 == p2 || p1 == q2 || q1 == p2 || q1 == q2 {
        return false;
    }

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    o1 != o2 && o3 != o4
}

/// Check whether any part of segment `p1-p2` lies on or within a circle
///
/// Solves `|p1 + t(p2 - p1) - center|² = radius²` for `t ∈ [0, 1]`. A
/// segment starting inside the circle (`c < 0`) or ending inside it is
/// blocked even though neither root falls in range.
pub fn segment_intersects_circle(p1: Point, p2: Point, center: Point, radius: f32) -> bool {
    let d = p2 - p1;
    let f = p1 - center;
    let r2 = radius * radius;

    let c = f.length_squared() - r2;
    if c < 0.0 || (p2 - center).length_squared() < r2 {
        return true;
    }

    let a = d.length_squared();
    if a == 0.0 {
        // Zero-length segment outside the circle
        return false;
    }
    let b = 2.0 * d.dot(f);

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn p(x: f32, y: f32) -> Point {
        Vec2::new(x, y)
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0)), 5.0);
        assert_eq!(distance(p(0.2, 0.2), p(0.2, 0.2)), 0.0);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)),
            Orientation::Collinear
        );
        assert_ne!(
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)),
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, -1.0))
        );
    }

    #[test]
    fn test_x_crossing() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(1.0, 0.0)
        ));
    }

    #[test]
    fn test_shared_endpoint_is_not_crossing() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 2.0)
        ));
        // Shared endpoint at a real angle
        assert!(!segments_intersect(
            p(0.2, 0.2),
            p(0.8, 0.4),
            p(0.2, 0.2),
            p(0.5, 0.9)
        ));
        // Reversed segment direction
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.5, 0.9),
            p(0.0, 0.0)
        ));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0)
        ));
        // Lines would cross, segments do not
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(0.4, 0.4),
            p(0.0, 1.0),
            p(1.0, 0.0)
        ));
    }

    #[test]
    fn test_collinear_overlap_not_flagged() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(0.6, 0.0),
            p(0.3, 0.0),
            p(0.9, 0.0)
        ));
    }

    #[test]
    fn test_circle_through_center() {
        assert!(segment_intersects_circle(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.5, 0.5),
            0.1
        ));
    }

    #[test]
    fn test_circle_miss() {
        assert!(!segment_intersects_circle(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.5, 0.5),
            0.1
        ));
        // Circle beyond the end of the segment, on the same line
        assert!(!segment_intersects_circle(
            p(0.0, 0.0),
            p(0.3, 0.0),
            p(0.6, 0.0),
            0.1
        ));
    }

    #[test]
    fn test_segment_fully_inside_circle() {
        assert!(segment_intersects_circle(
            p(0.49, 0.5),
            p(0.51, 0.5),
            p(0.5, 0.5),
            0.1
        ));
    }

    #[test]
    fn test_segment_ending_inside_circle() {
        assert!(segment_intersects_circle(
            p(0.0, 0.5),
            p(0.5, 0.5),
            p(0.5, 0.5),
            0.1
        ));
        assert!(segment_intersects_circle(
            p(0.5, 0.5),
            p(1.0, 0.5),
            p(0.5, 0.5),
            0.1
        ));
    }

    #[test]
    fn test_zero_length_segment() {
        assert!(!segment_intersects_circle(
            p(0.1, 0.1),
            p(0.1, 0.1),
            p(0.5, 0.5),
            0.1
        ));
        assert!(segment_intersects_circle(
            p(0.52, 0.5),
            p(0.52, 0.5),
            p(0.5, 0.5),
            0.1
        ));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn unit() -> impl Strategy<Value = f32> {
            0.0f32..=1.0
        }

        proptest! {
            #[test]
            fn crossing_is_symmetric(
                ax in unit(), ay in unit(), bx in unit(), by in unit(),
                cx in unit(), cy in unit(), dx in unit(), dy in unit(),
            ) {
                let (a, b, c, d) = (p(ax, ay), p(bx, by), p(cx, cy), p(dx, dy));
                prop_assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
            }

            #[test]
            fn segment_touching_circle_center_is_blocked(
                ax in unit(), ay in unit(), bx in unit(), by in unit(),
                t in 0.0f32..=1.0, r in 0.05f32..=0.1,
            ) {
                let (a, b) = (p(ax, ay), p(bx, by));
                let center = a.lerp(b, t);
                prop_assert!(segment_intersects_circle(a, b, center, r));
            }
        }
    }
}
