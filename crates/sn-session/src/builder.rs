//! Fluent builder for constructing a [`Session`].

use sn_attention::AttentionCycle;
use sn_core::{Clock, CoreError, GameConfig, GameRng};
use sn_interaction::{CaughtOverlay, InteractionCoordinator, Player, Room};
use tracing::info;

use crate::{Session, SessionResult};

/// Stream offset of the attention cycle's child RNG.
const ATTENTION_STREAM: u64 = 1;

/// Fluent builder for [`Session<C>`].
///
/// # Required inputs
///
/// - [`GameConfig`]: attention ranges, step size, panel size, seed, …
/// - `C: Clock`: [`sn_core::MonotonicClock`] in a game,
///   [`sn_core::ManualClock`] in tests
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                           |
/// |---------------|---------------------------------------------------|
/// | `.room(r)`    | `Room::layout(config.panel, config.bookshelf_count, rng)` |
/// | `.seed(s)`    | `config.seed`                                     |
pub struct SessionBuilder<C: Clock> {
    config: GameConfig,
    clock:  C,
    room:   Option<Room>,
    seed:   Option<u64>,
}

impl<C: Clock> SessionBuilder<C> {
    pub fn new(config: GameConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            room: None,
            seed: None,
        }
    }

    /// Use a hand-built room instead of the generated layout.
    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    /// Override `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration, lay out the room, and start the librarian
    /// cycle at the clock's current time.
    pub fn build(self) -> SessionResult<Session<C>> {
        let mut config = self.config;
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;

        let mut rng = GameRng::from_optional_seed(config.seed);
        let attention_rng = rng.child(ATTENTION_STREAM);

        let room = match self.room {
            Some(room) => {
                for (what, rect) in [("snack_station", room.snack_station), ("desk", room.desk)] {
                    if rect.is_empty() {
                        return Err(CoreError::EmptySize {
                            what,
                            width:  rect.width,
                            height: rect.height,
                        }
                        .into());
                    }
                }
                room
            }
            None => Room::layout(config.panel, config.bookshelf_count, &mut rng),
        };

        let attention = AttentionCycle::new(config.attention, attention_rng, self.clock.now())?;
        let player = Player::new(room.player_start(), config.player_size);

        info!(
            seed = ?config.seed,
            panel = %room.panel,
            shelves = room.bookshelves.len(),
            "session ready"
        );

        Ok(Session {
            config,
            clock: self.clock,
            rng,
            attention,
            player,
            room,
            coordinator: InteractionCoordinator::new(),
            overlay: CaughtOverlay::default(),
        })
    }
}
