//! Entities with a position: the player and the obstacles.
//!
//! Positions are mutated only by movement, reset, and layout.  Hitboxes are
//! derived from the current position on every call.

use sn_core::{Point, Polygon, Rect, Size};
use sn_spatial::{BOOKSHELF_OFFSETS, polygon_of, rectangle_of};

use crate::WalkCycle;

// ── Direction / Facing ────────────────────────────────────────────────────────

/// One movement input.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step as `(dx, dy)` in screen space.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
        }
    }
}

/// Which way the player sprite looks.  Only horizontal moves change it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The player-controlled snack runner.
#[derive(Clone, Debug)]
pub struct Player {
    position:       Point,
    start:          Point,
    size:           Size,
    carrying_snack: bool,
    facing:         Facing,
}

impl Player {
    /// A player standing at `start`, empty-handed, facing right.
    pub fn new(start: Point, size: Size) -> Self {
        Self {
            position: start,
            start,
            size,
            carrying_snack: false,
            facing: Facing::Right,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[inline]
    pub fn is_carrying_snack(&self) -> bool {
        self.carrying_snack
    }

    pub fn set_carrying_snack(&mut self, carrying: bool) {
        self.carrying_snack = carrying;
    }

    /// Current rectangle hitbox.
    #[inline]
    pub fn hitbox(&self) -> Rect {
        rectangle_of(self.position, self.size)
    }

    /// Move `step_px` pixels in `direction`.
    ///
    /// The left and top panel edges stop the player at 0.  Right and bottom
    /// are unbounded (the panel clips the sprite instead) up to `i32::MAX`.
    pub fn step(&mut self, direction: Direction, step_px: i32) {
        let (dx, dy) = direction.delta();
        let mut x = self.position.x.saturating_add(dx.saturating_mul(step_px));
        let mut y = self.position.y.saturating_add(dy.saturating_mul(step_px));
        if dx < 0 {
            x = x.max(0);
        }
        if dy < 0 {
            y = y.max(0);
        }
        self.position = Point::new(x, y);

        match direction {
            Direction::Left  => self.facing = Facing::Left,
            Direction::Right => self.facing = Facing::Right,
            Direction::Up | Direction::Down => {}
        }
    }

    /// Teleport without touching the start point.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Change where [`reset_position`][Self::reset_position] returns to.
    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    pub fn reset_position(&mut self) {
        self.position = self.start;
    }

    /// Frames a renderer should play for the latest step.
    pub fn walk_cycle(&self) -> WalkCycle {
        WalkCycle::new(self.carrying_snack, self.facing)
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A static room object with an irregular polygon hitbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obstacle {
    position: Point,
    size:     Size,
    offsets:  &'static [Point],
}

impl Obstacle {
    /// An obstacle whose hitbox is `offsets` applied to its top-left corner.
    pub fn new(position: Point, size: Size, offsets: &'static [Point]) -> Self {
        Self { position, size, offsets }
    }

    /// A bookshelf sprite of `size` at `position`.
    pub fn bookshelf(position: Point, size: Size) -> Self {
        Self::new(position, size, &BOOKSHELF_OFFSETS)
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Full sprite rectangle, for drawing.  Not used for collisions.
    #[inline]
    pub fn sprite_bounds(&self) -> Rect {
        rectangle_of(self.position, self.size)
    }

    /// Current polygon hitbox.
    #[inline]
    pub fn hitbox(&self) -> Polygon {
        polygon_of(self.position, self.offsets)
    }
}
