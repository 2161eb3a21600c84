//! Hitbox construction from an entity's top-left position.

use sn_core::{Point, Polygon, Rect, Size};

/// Bookshelf silhouette, as offsets from the sprite's top-left corner.
///
/// A slanted quadrilateral hugging the visible shelf rather than the full
/// sprite rectangle, so the player can pass close to the drawn edges.
pub const BOOKSHELF_OFFSETS: [Point; 4] = [
    Point::new(52, 115),
    Point::new(165, 175),
    Point::new(135, 190),
    Point::new(17, 130),
];

/// Axis-aligned hitbox of an entity at `position` with `size`.
#[inline]
pub fn rectangle_of(position: Point, size: Size) -> Rect {
    Rect::from_origin_size(position, size)
}

/// Polygon hitbox: each offset applied to `position`, order preserved.
pub fn polygon_of(position: Point, offsets: &[Point]) -> Polygon {
    Polygon::new(
        offsets
            .iter()
            .map(|d| position.offset(d.x, d.y))
            .collect(),
    )
}
