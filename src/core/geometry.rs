use bevy::prelude::*;

/// Teleport-style screen wrap. Crossing an edge re-enters at the opposite
/// edge exactly, without preserving the overshoot; at most one wrap per axis
/// per step. The far boundary itself counts as in-field.
pub fn wrap_point(p: Vec2, field: Vec2) -> Vec2 {
    let mut out = p;
    if out.x < 0.0 {
        out.x = field.x;
    } else if out.x > field.x {
        out.x = 0.0;
    }
    if out.y < 0.0 {
        out.y = field.y;
    } else if out.y > field.y {
        out.y = 0.0;
    }
    out
}

/// Strict circle overlap: touching circles do not collide.
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Unit vector for a field-space heading.
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn wrap_left_edge_reenters_right() {
        let p = wrap_point(Vec2::new(-3.0, 200.0), FIELD);
        assert_eq!(p, Vec2::new(800.0, 200.0));
    }

    #[test]
    fn wrap_right_edge_reenters_left() {
        let p = wrap_point(Vec2::new(803.0, 200.0), FIELD);
        assert_eq!(p, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn wrap_vertical_edges() {
        assert_eq!(wrap_point(Vec2::new(100.0, -1.0), FIELD).y, 600.0);
        assert_eq!(wrap_point(Vec2::new(100.0, 601.0), FIELD).y, 0.0);
    }

    #[test]
    fn wrap_leaves_interior_points_alone() {
        let p = Vec2::new(400.0, 300.0);
        assert_eq!(wrap_point(p, FIELD), p);
    }

    #[test]
    fn wrap_keeps_far_boundary() {
        let p = Vec2::new(800.0, 600.0);
        assert_eq!(wrap_point(p, FIELD), p);
    }

    #[test]
    fn wrap_both_axes_in_one_step() {
        let p = wrap_point(Vec2::new(-2.0, 602.0), FIELD);
        assert_eq!(p, Vec2::new(800.0, 0.0));
    }

    #[test]
    fn overlap_is_strict_at_touch_distance() {
        let a = Vec2::ZERO;
        let b = Vec2::new(30.0, 0.0);
        assert!(!circles_overlap(a, 10.0, b, 20.0));
        assert!(circles_overlap(a, 10.0, b, 20.1));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Vec2::new(5.0, 9.0);
        let b = Vec2::new(12.0, 1.0);
        assert_eq!(
            circles_overlap(a, 4.0, b, 8.0),
            circles_overlap(b, 8.0, a, 4.0)
        );
    }

    #[test]
    fn heading_zero_points_along_x() {
        let v = heading_vector(0.0);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }
}
