//! Pure geometry helpers - shape vertices and collision tests.
//!
//! All coordinates are logical arena pixels with +Y pointing down.  Angles
//! are in degrees, measured clockwise from "up".

use crate::constants::SHIP_BACK_VERTEX_OFFSET;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle.  `w` and `h` are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Square of side `size` centred on `center`.
    pub const fn centered_on(center: Point, size: i32) -> Self {
        Rect {
            x: center.x - size / 2,
            y: center.y - size / 2,
            w: size,
            h: size,
        }
    }

    pub const fn center(&self) -> Point {
        Point {
            x: self.x + self.w / 2,
            y: self.y + self.h / 2,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

// ── Shape vertices ────────────────────────────────────────────────────────────

/// Vertices of the player's ship: the nose points along `angle_degrees`, the
/// two back corners sit ≈150° either side of it, all `size` from `center`.
pub fn oriented_triangle_vertices(center: Point, size: i32, angle_degrees: f64) -> [Point; 3] {
    let radians = angle_degrees.to_radians();
    let size = f64::from(size);
    let at = |theta: f64| Point {
        x: center.x + (theta.sin() * size) as i32,
        y: center.y - (theta.cos() * size) as i32,
    };
    [
        at(radians),
        at(radians + SHIP_BACK_VERTEX_OFFSET),
        at(radians - SHIP_BACK_VERTEX_OFFSET),
    ]
}

/// Corners of `rect` rotated by `angle_degrees` about its own centre, in the
/// order top-left, top-right, bottom-right, bottom-left.
pub fn oriented_square_vertices(rect: Rect, angle_degrees: f64) -> [Point; 4] {
    let c = rect.center();
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let hw = f64::from(rect.w) / 2.0;
    let hh = f64::from(rect.h) / 2.0;
    let rotate = |dx: f64, dy: f64| Point {
        x: c.x + (cos * dx - sin * dy) as i32,
        y: c.y + (sin * dx + cos * dy) as i32,
    };
    [
        rotate(-hw, -hh),
        rotate(hw, -hh),
        rotate(hw, hh),
        rotate(-hw, hh),
    ]
}

// ── Collision ─────────────────────────────────────────────────────────────────

/// Circle vs rectangle.  The rect's nearest point to the centre must be
/// strictly closer than `radius`; touching exactly is not a hit.
pub fn circle_intersects_rect(cx: i32, cy: i32, radius: i32, rect: &Rect) -> bool {
    let closest_x = cx.clamp(rect.x, rect.right());
    let closest_y = cy.clamp(rect.y, rect.bottom());
    let dx = i64::from(cx - closest_x);
    let dy = i64::from(cy - closest_y);
    let r = i64::from(radius);
    dx * dx + dy * dy < r * r
}

/// AABB overlap with a non-empty intersection.  Edges that merely touch do
/// not count, and an empty rect intersects nothing.
pub fn rect_intersects_rect(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// True if `p` lies inside (or on the edge of) the convex polygon `vertices`,
/// whichever winding order the vertices use.
pub fn point_in_convex_polygon(p: (f64, f64), vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        let cross = (f64::from(b.x) - f64::from(a.x)) * (p.1 - f64::from(a.y))
            - (f64::from(b.y) - f64::from(a.y)) * (p.0 - f64::from(a.x));
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}
