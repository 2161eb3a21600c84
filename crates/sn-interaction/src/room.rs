//! Room layout: where the stations, librarian, and bookshelves stand.

use sn_core::{GameRng, Point, Rect, Size};

use crate::Obstacle;

/// Horizontal margin kept free of bookshelves on both sides, so the snack
/// station and desk columns stay walkable.
const SHELF_MARGIN_X: i32 = 150;

/// Distance of the station and desk from the side walls.
const WALL_GAP: i32 = 10;

/// Static geometry of one scene.
#[derive(Clone, Debug)]
pub struct Room {
    pub panel:         Size,
    pub snack_station: Rect,
    pub desk:          Rect,
    /// Where the renderer draws the librarian.  Not a hitbox.
    pub librarian:     Rect,
    pub bookshelves:   Vec<Obstacle>,
}

impl Room {
    /// A room with explicit geometry (no librarian sprite).
    pub fn new(panel: Size, snack_station: Rect, desk: Rect, bookshelves: Vec<Obstacle>) -> Self {
        Self {
            panel,
            snack_station,
            desk,
            librarian: Rect::default(),
            bookshelves,
        }
    }

    /// Lay the room out for a `panel`-sized game area.
    ///
    /// Every object is `w/8 × h/4`.  The snack station hugs the left wall and
    /// the desk the right wall, both vertically centred; the librarian sits
    /// centred at four fifths of the height.  Bookshelves are spaced evenly
    /// between the side margins, each in its own row slot, with the slots
    /// shuffled so every layout is different.
    pub fn layout(panel: Size, bookshelf_count: usize, rng: &mut GameRng) -> Self {
        let (w, h) = (panel.width, panel.height);
        let object = Size::new(w / 8, h / 4);

        let snack_station = Rect::new(
            WALL_GAP,
            h / 2 - object.height / 2,
            object.width,
            object.height,
        );
        let desk = Rect::new(
            w - object.width - WALL_GAP,
            h / 2 - object.height / 2,
            object.width,
            object.height,
        );
        let librarian = Rect::new(
            w / 2 - object.width / 2,
            4 * h / 5 - object.height / 2,
            object.width,
            object.height,
        );

        let bookshelves = if bookshelf_count == 0 {
            Vec::new()
        } else {
            let n = bookshelf_count as i32;
            let spacing = (w - 2 * SHELF_MARGIN_X) / (n + 1);
            let margin_y = object.height / 14;

            let mut rows: Vec<i32> = (0..n)
                .map(|i| margin_y + (h - object.height) * (i + 1) / (n + 1))
                .collect();
            rng.shuffle(&mut rows);

            rows.into_iter()
                .enumerate()
                .map(|(i, y)| {
                    let x = SHELF_MARGIN_X + spacing * (i as i32 + 1) - object.width / 2;
                    Obstacle::bookshelf(Point::new(x, y), object)
                })
                .collect()
        };

        Self { panel, snack_station, desk, librarian, bookshelves }
    }

    /// Where the player (re)spawns: on top of the snack station.
    #[inline]
    pub fn player_start(&self) -> Point {
        self.snack_station.origin()
    }
}
