//! `sn-spatial` — hitboxes and intersection predicates.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`hitbox`]    | `rectangle_of`, `polygon_of`, `BOOKSHELF_OFFSETS`            |
//! | [`collision`] | `rect_intersects_rect`, `polygon_intersects_rect`            |
//!
//! Everything here is a pure function of its arguments.  Hitboxes are
//! recomputed from the current position on every query and never cached.
//!
//! # Overlap semantics
//!
//! Both predicates require a positive-area overlap.  Shapes that only share
//! an edge or a corner do not collide.

pub mod collision;
pub mod hitbox;

#[cfg(test)]
mod tests;

pub use collision::{polygon_intersects_rect, rect_intersects_rect};
pub use hitbox::{BOOKSHELF_OFFSETS, polygon_of, rectangle_of};
