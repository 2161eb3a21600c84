//! Intersection predicates.
//!
//! `rect_intersects_rect` is the usual strict AABB test on widened integers.
//!
//! `polygon_intersects_rect` clips the polygon against the rectangle's four
//! half-planes (Sutherland–Hodgman) and checks whether anything of positive
//! area is left.  The rectangle is convex, so this is exact for any simple
//! polygon, concave ones included; a concave polygon may clip to a shape with
//! zero-width bridges along the rectangle's border, but those add no area.
//!
//! Clipping runs in rectangle-local coordinates (the integer translation is
//! exact), so rounding depends on how far the polygon reaches from the
//! rectangle, not on where both sit in the world.  Overlaps thinner than
//! `RELATIVE_AREA_EPSILON` of the rectangle's area count as contact.

use sn_core::{Polygon, Rect};

/// Clipped areas at or below this fraction of the rectangle's area are
/// treated as boundary contact.
const RELATIVE_AREA_EPSILON: f64 = 1e-12;

/// `true` iff `a` and `b` overlap with positive area.
///
/// Touching edges do not count.  Empty rectangles never overlap anything.
pub fn rect_intersects_rect(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    (a.x as i64) < b.right()
        && (b.x as i64) < a.right()
        && (a.y as i64) < b.bottom()
        && (b.y as i64) < a.bottom()
}

/// `true` iff `poly` and `rect` overlap with positive area.
///
/// Shapes that only share boundary points do not collide.  Degenerate
/// polygons (fewer than three vertices) never collide.
pub fn polygon_intersects_rect(poly: &Polygon, rect: &Rect) -> bool {
    if poly.is_degenerate() || rect.is_empty() {
        return false;
    }
    // Cheap rejection; also covers polygons whose vertices are collinear on
    // an axis, which have an empty bounding box.
    if !poly.bounds().is_some_and(|b| rect_intersects_rect(&b, rect)) {
        return false;
    }

    let mut clipped: Vec<Vertex> = poly
        .vertices
        .iter()
        .map(|p| Vertex {
            x: (p.x as i64 - rect.x as i64) as f64,
            y: (p.y as i64 - rect.y as i64) as f64,
        })
        .collect();

    let width  = rect.width as f64;
    let height = rect.height as f64;

    for edge in [Edge::Left(0.0), Edge::Right(width), Edge::Top(0.0), Edge::Bottom(height)] {
        clipped = clip(&clipped, edge);
        if clipped.len() < 3 {
            return false;
        }
    }

    area(&clipped) > RELATIVE_AREA_EPSILON * width * height
}

// ── Clipping internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Vertex {
    x: f64,
    y: f64,
}

/// One side of the clip rectangle; the inside is the half-plane containing
/// the rectangle, boundary included.
#[derive(Copy, Clone, Debug)]
enum Edge {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl Edge {
    #[inline]
    fn inside(self, v: Vertex) -> bool {
        match self {
            Edge::Left(x)   => v.x >= x,
            Edge::Right(x)  => v.x <= x,
            Edge::Top(y)    => v.y >= y,
            Edge::Bottom(y) => v.y <= y,
        }
    }

    /// Where segment `a → b` crosses this edge's line.
    ///
    /// Only called with `a` and `b` on opposite sides, so the divisor is
    /// non-zero.  The coordinate on the clip line is set exactly rather than
    /// interpolated, which keeps edge-sharing cases at exactly zero area.
    fn crossing(self, a: Vertex, b: Vertex) -> Vertex {
        match self {
            Edge::Left(x) | Edge::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                Vertex { x, y: a.y + t * (b.y - a.y) }
            }
            Edge::Top(y) | Edge::Bottom(y) => {
                let t = (y - a.y) / (b.y - a.y);
                Vertex { x: a.x + t * (b.x - a.x), y }
            }
        }
    }
}

/// Clip `subject` against one half-plane.
fn clip(subject: &[Vertex], edge: Edge) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(subject.len() + 2);
    let Some(&last) = subject.last() else {
        return out;
    };

    let mut prev = last;
    for &cur in subject {
        match (edge.inside(prev), edge.inside(cur)) {
            (true, true) => out.push(cur),
            (true, false) => out.push(edge.crossing(prev, cur)),
            (false, true) => {
                out.push(edge.crossing(prev, cur));
                out.push(cur);
            }
            (false, false) => {}
        }
        prev = cur;
    }
    out
}

/// Unsigned shoelace area.
fn area(vertices: &[Vertex]) -> f64 {
    let n = vertices.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    (twice * 0.5).abs()
}
