use arena_shooter::geometry::*;

// ── oriented_triangle_vertices ────────────────────────────────────────────────

#[test]
fn triangle_facing_up_has_nose_above_center() {
    let v = oriented_triangle_vertices(Point::new(100, 100), 20, 0.0);
    assert_eq!(v[0], Point::new(100, 80));
    // Back corners ≈150° either side of the nose, truncated toward zero
    assert_eq!(v[1], Point::new(109, 117));
    assert_eq!(v[2], Point::new(91, 117));
}

#[test]
fn triangle_facing_right_has_nose_right_of_center() {
    let v = oriented_triangle_vertices(Point::new(100, 100), 20, 90.0);
    assert_eq!(v[0], Point::new(120, 100));
    // Both back corners sit behind (left of) the centre
    assert!(v[1].x < 100 && v[2].x < 100);
}

#[test]
fn triangle_vertices_are_within_size_of_center() {
    let c = Point::new(640, 360);
    for angle in [0.0, 33.0, 90.0, 135.0, 180.0, 270.0, 359.0] {
        for v in oriented_triangle_vertices(c, 20, angle) {
            let dx = f64::from(v.x - c.x);
            let dy = f64::from(v.y - c.y);
            assert!((dx * dx + dy * dy).sqrt() <= 20.0, "angle {angle}: {v:?}");
        }
    }
}

// ── oriented_square_vertices ──────────────────────────────────────────────────

#[test]
fn unrotated_square_returns_its_corners() {
    let v = oriented_square_vertices(Rect::new(0, 0, 40, 40), 0.0);
    assert_eq!(
        v,
        [
            Point::new(0, 0),
            Point::new(40, 0),
            Point::new(40, 40),
            Point::new(0, 40)
        ]
    );
}

#[test]
fn square_rotated_45_becomes_a_diamond() {
    let v = oriented_square_vertices(Rect::new(0, 0, 40, 40), 45.0);
    assert_eq!(v[0], Point::new(20, -8));
    assert_eq!(v[1], Point::new(48, 20));
    assert_eq!(v[2], Point::new(20, 48));
    assert_eq!(v[3], Point::new(-8, 20));
}

// ── circle_intersects_rect ────────────────────────────────────────────────────

#[test]
fn circle_touching_rect_exactly_is_not_a_hit() {
    let rect = Rect::new(10, 0, 10, 10);
    // Nearest point (10, 5) is exactly 10 away
    assert!(!circle_intersects_rect(0, 5, 10, &rect));
}

#[test]
fn circle_overlapping_rect_is_a_hit() {
    let rect = Rect::new(10, 0, 10, 10);
    assert!(circle_intersects_rect(0, 5, 11, &rect));
}

#[test]
fn circle_touching_corner_exactly_is_not_a_hit() {
    // 3-4-5 triangle to the corner (10, 10)
    let rect = Rect::new(10, 10, 10, 10);
    assert!(!circle_intersects_rect(7, 6, 5, &rect));
    assert!(circle_intersects_rect(7, 6, 6, &rect));
}

#[test]
fn circle_centre_inside_rect_is_a_hit() {
    let rect = Rect::new(0, 0, 100, 100);
    assert!(circle_intersects_rect(50, 50, 1, &rect));
}

// ── rect_intersects_rect ──────────────────────────────────────────────────────

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(rect_intersects_rect(&a, &b));
    assert!(rect_intersects_rect(&b, &a));
}

#[test]
fn rects_sharing_an_edge_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(10, 0, 10, 10);
    assert!(!rect_intersects_rect(&a, &b));
}

#[test]
fn contained_rect_intersects() {
    let outer = Rect::new(0, 0, 40, 40);
    let inner = Rect::new(10, 10, 5, 5);
    assert!(rect_intersects_rect(&outer, &inner));
}

#[test]
fn empty_rect_never_intersects() {
    let a = Rect::new(0, 0, 10, 10);
    let empty = Rect::new(5, 5, 0, 10);
    assert!(!rect_intersects_rect(&a, &empty));
}

// ── point_in_convex_polygon ───────────────────────────────────────────────────

#[test]
fn point_in_polygon_either_winding() {
    let cw = [
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(0, 10),
    ];
    let mut ccw = cw;
    ccw.reverse();
    for poly in [&cw[..], &ccw[..]] {
        assert!(point_in_convex_polygon((5.0, 5.0), poly));
        assert!(!point_in_convex_polygon((15.0, 5.0), poly));
    }
}

#[test]
fn rect_helpers() {
    let r = Rect::centered_on(Point::new(300, 220), 10);
    assert_eq!(r, Rect::new(295, 215, 10, 10));
    assert_eq!(r.center(), Point::new(300, 220));
    assert_eq!(r.right(), 305);
    assert_eq!(r.bottom(), 225);
}
