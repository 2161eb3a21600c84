//! Unit tests for sn-spatial.

use sn_core::{Point, Polygon, Rect, Size};

use crate::{BOOKSHELF_OFFSETS, polygon_intersects_rect, polygon_of, rect_intersects_rect, rectangle_of};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn poly(points: &[(i32, i32)]) -> Polygon {
    Polygon::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn rect_as_polygon(r: &Rect) -> Polygon {
    poly(&[
        (r.x, r.y),
        (r.x + r.width, r.y),
        (r.x + r.width, r.y + r.height),
        (r.x, r.y + r.height),
    ])
}

/// A "U" turned upside down: a bar across the top (y 0..100) with two legs
/// down to y = 300.  The notch x∈[100,200], y∈[100,300] is outside it.
fn arch() -> Polygon {
    poly(&[
        (0, 0), (300, 0), (300, 300), (200, 300),
        (200, 100), (100, 100), (100, 300), (0, 300),
    ])
}

// ── Hitbox construction ───────────────────────────────────────────────────────

#[cfg(test)]
mod hitbox {
    use super::*;

    #[test]
    fn rectangle_follows_position() {
        let r = rectangle_of(Point::new(30, 40), Size::new(100, 100));
        assert_eq!(r, Rect::new(30, 40, 100, 100));
    }

    #[test]
    fn polygon_applies_offsets_in_order() {
        let p = polygon_of(Point::new(10, 20), &BOOKSHELF_OFFSETS);
        assert_eq!(
            p.vertices,
            vec![
                Point::new(62, 135),
                Point::new(175, 195),
                Point::new(145, 210),
                Point::new(27, 150),
            ]
        );
    }

    #[test]
    fn polygon_near_i32_max_saturates() {
        let p = polygon_of(Point::new(i32::MAX - 100, 0), &BOOKSHELF_OFFSETS);
        assert_eq!(p.vertices[0], Point::new(i32::MAX - 48, 115));
        assert_eq!(p.vertices[1], Point::new(i32::MAX, 175));
        assert_eq!(p.vertices[2], Point::new(i32::MAX, 190));
    }

    #[test]
    fn polygon_recomputed_from_new_position() {
        let a = polygon_of(Point::new(0, 0), &BOOKSHELF_OFFSETS);
        let b = polygon_of(Point::new(5, 0), &BOOKSHELF_OFFSETS);
        for (pa, pb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(pb.x - pa.x, 5);
            assert_eq!(pb.y, pa.y);
        }
    }
}

// ── Rectangle / rectangle ─────────────────────────────────────────────────────

#[cfg(test)]
mod rect_rect {
    use super::*;

    #[test]
    fn overlapping() {
        assert!(rect_intersects_rect(&Rect::new(0, 0, 100, 100), &Rect::new(50, 50, 100, 100)));
    }

    #[test]
    fn containment() {
        assert!(rect_intersects_rect(&Rect::new(0, 0, 100, 100), &Rect::new(10, 10, 5, 5)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(!rect_intersects_rect(&a, &Rect::new(100, 0, 50, 50)));
        assert!(!rect_intersects_rect(&a, &Rect::new(0, 100, 50, 50)));
        assert!(!rect_intersects_rect(&a, &Rect::new(100, 100, 50, 50)));
    }

    #[test]
    fn empty_never_overlaps() {
        assert!(!rect_intersects_rect(&Rect::new(0, 0, 100, 100), &Rect::new(10, 10, 0, 10)));
    }

    #[test]
    fn separated() {
        assert!(!rect_intersects_rect(&Rect::new(0, 0, 10, 10), &Rect::new(20, 20, 10, 10)));
    }
}

// ── Polygon / rectangle ───────────────────────────────────────────────────────

#[cfg(test)]
mod poly_rect {
    use super::*;

    #[test]
    fn polygon_far_to_the_right() {
        let player = Rect::new(0, 0, 100, 100);
        let shelf = poly(&[(200, 10), (300, 40), (280, 90), (210, 60)]);
        assert!(!polygon_intersects_rect(&shelf, &player));
    }

    #[test]
    fn partial_overlap() {
        let tri = poly(&[(50, 50), (150, 50), (50, 150)]);
        assert!(polygon_intersects_rect(&tri, &Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn shared_edge_is_not_a_collision() {
        let square = poly(&[(100, 0), (200, 0), (200, 100), (100, 100)]);
        assert!(!polygon_intersects_rect(&square, &Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn shared_corner_is_not_a_collision() {
        let tri = poly(&[(100, 100), (150, 100), (150, 150)]);
        assert!(!polygon_intersects_rect(&tri, &Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn rect_touching_diagonal_edge_is_not_a_collision() {
        // Hypotenuse x + y = 100 passes through the rect's top-left corner.
        let tri = poly(&[(0, 0), (100, 0), (0, 100)]);
        assert!(!polygon_intersects_rect(&tri, &Rect::new(50, 50, 50, 50)));
        assert!(polygon_intersects_rect(&tri, &Rect::new(49, 49, 50, 50)));
    }

    #[test]
    fn sliver_overlap_collides() {
        // Long shallow wedge: inside the unit rect it is a triangle of area
        // 2.5e-10, thin but real.
        let wedge = poly(&[(0, 0), (2_000_000_000, 1), (2_000_000_000, 0)]);
        assert!(polygon_intersects_rect(&wedge, &Rect::new(0, 0, 1, 1)));
    }

    #[test]
    fn touch_far_from_origin_is_not_a_collision() {
        // Edge x + y = 2e8 + 200 meets only the rect's bottom-right corner.
        let base = 100_000_000;
        let tri = poly(&[(base + 200, base), (base, base + 200), (base + 300, base + 300)]);
        assert!(!polygon_intersects_rect(&tri, &Rect::new(base, base, 100, 100)));
        assert!(polygon_intersects_rect(&tri, &Rect::new(base + 1, base + 1, 100, 100)));
    }

    #[test]
    fn rect_inside_polygon() {
        let big = poly(&[(-50, -50), (150, -50), (150, 150), (-50, 150)]);
        assert!(polygon_intersects_rect(&big, &Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn polygon_inside_rect() {
        let small = poly(&[(40, 40), (60, 45), (50, 60)]);
        assert!(polygon_intersects_rect(&small, &Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn rect_in_concave_notch_is_clear() {
        assert!(!polygon_intersects_rect(&arch(), &Rect::new(110, 150, 80, 100)));
    }

    #[test]
    fn rect_reaching_into_arch_bar_collides() {
        assert!(polygon_intersects_rect(&arch(), &Rect::new(110, 50, 80, 100)));
    }

    #[test]
    fn degenerate_polygon_never_collides() {
        let line = poly(&[(0, 0), (100, 100)]);
        assert!(!polygon_intersects_rect(&line, &Rect::new(0, 0, 100, 100)));
        let collinear = poly(&[(50, 0), (50, 50), (50, 100)]);
        assert!(!polygon_intersects_rect(&collinear, &Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn bookshelf_silhouette_tighter_than_sprite() {
        let shelf = polygon_of(Point::new(300, 200), &BOOKSHELF_OFFSETS);
        // Overlaps the sprite's top-left corner area but not the silhouette,
        // which starts 115 px below the sprite's top edge.
        let player = Rect::new(250, 150, 100, 100);
        assert!(rect_intersects_rect(&player, &Rect::new(300, 200, 150, 150)));
        assert!(!polygon_intersects_rect(&shelf, &player));
        // Walking down into the shelf body hits it.
        let player = Rect::new(300, 260, 100, 100);
        assert!(polygon_intersects_rect(&shelf, &player));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..150, 1i32..150)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn rect_test_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(rect_intersects_rect(&a, &b), rect_intersects_rect(&b, &a));
        }

        #[test]
        fn rect_polygon_agrees_with_aabb(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(
                polygon_intersects_rect(&rect_as_polygon(&a), &b),
                rect_intersects_rect(&a, &b)
            );
        }

        #[test]
        fn far_polygon_never_collides(x in 200i32..=220, dy in 0i32..50) {
            let shelf = poly(&[(x, dy), (x + 80, dy + 10), (x + 60, dy + 40)]);
            prop_assert!(!polygon_intersects_rect(&shelf, &Rect::new(0, 0, 100, 100)));
        }
    }
}
