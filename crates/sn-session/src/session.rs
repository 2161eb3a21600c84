//! The [`Session`] struct: single owner of all mutable game state.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use sn_attention::{AttentionCycle, AttentionState};
use sn_core::{Clock, GameConfig, GameRng, Polygon, Rect, Size, Timestamp};
use sn_interaction::{
    CaughtOverlay, CaughtReason, Direction, InteractionCoordinator, InteractionOutcome, Player,
    Room, WalkCycle,
};
use tracing::{debug, info, trace};

use crate::observer::SessionObserver;

/// A session shared between the ticker thread and the input path.
pub type SharedSession<C> = Arc<Mutex<Session<C>>>;

/// Hitbox geometry for a debug overlay renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugHitboxes {
    pub player:    Rect,
    pub obstacles: Vec<Polygon>,
}

/// One running game: the librarian, the player, the room, and the score.
///
/// Create with [`SessionBuilder`][crate::SessionBuilder].  Drive the
/// librarian with [`tick`][Self::tick] (usually from an
/// [`AttentionTicker`][crate::AttentionTicker]) and the player with
/// [`move_player`][Self::move_player].
pub struct Session<C: Clock> {
    pub(crate) config:      GameConfig,
    pub(crate) clock:       C,
    /// Drives re-layouts; the attention cycle owns a separate child stream.
    pub(crate) rng:         GameRng,
    pub(crate) attention:   AttentionCycle,
    pub(crate) player:      Player,
    pub(crate) room:        Room,
    pub(crate) coordinator: InteractionCoordinator,
    pub(crate) overlay:     CaughtOverlay,
}

impl<C: Clock> Session<C> {
    /// Wrap the session for sharing with an
    /// [`AttentionTicker`][crate::AttentionTicker].
    pub fn into_shared(self) -> SharedSession<C> {
        Arc::new(Mutex::new(self))
    }

    // ── Periodic path ─────────────────────────────────────────────────────

    /// Advance the librarian to the clock's current time.
    pub fn tick<O: SessionObserver>(&mut self, observer: &mut O) -> Option<AttentionState> {
        let now = self.clock.now();
        self.tick_at(now, observer)
    }

    /// Advance the librarian to `now`.  At most one transition per call.
    pub fn tick_at<O: SessionObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
    ) -> Option<AttentionState> {
        trace!(%now, state = %self.attention.current_state(), "attention tick");
        let changed = self.attention.tick(now);
        if let Some(state) = changed {
            observer.on_attention_changed(now, state);
        }
        changed
    }

    // ── Input path ────────────────────────────────────────────────────────

    /// Move the player one step and evaluate the interaction rules.
    ///
    /// While the caught overlay is showing the player is frozen: the call
    /// does nothing and returns [`InteractionOutcome::None`].
    pub fn move_player<O: SessionObserver>(
        &mut self,
        direction: Direction,
        observer: &mut O,
    ) -> InteractionOutcome {
        if self.overlay.is_active() {
            trace!(?direction, "movement ignored while caught");
            return InteractionOutcome::None;
        }

        self.player.step(direction, self.config.step_px);
        let outcome = self.coordinator.on_player_moved(
            &self.attention,
            &mut self.player,
            &self.room,
            &mut self.overlay,
        );
        if !outcome.is_none() {
            observer.on_outcome(outcome, self.coordinator.delivered_count());
        }
        outcome
    }

    /// Dismiss the caught screen and restart the scene.
    ///
    /// The player returns to the snack station empty-handed and the counter
    /// goes back to zero.  The librarian keeps cycling.  Returns `false` (and
    /// does nothing) when no caught screen is showing.
    pub fn acknowledge_caught<O: SessionObserver>(&mut self, observer: &mut O) -> bool {
        let Some(reason) = self.overlay.reason() else {
            return false;
        };

        let delivered = self.coordinator.delivered_count();
        self.player.set_start(self.room.player_start());
        self.player.reset_position();
        self.player.set_carrying_snack(false);
        self.coordinator.reset();
        self.overlay.clear();

        info!(%reason, delivered, "caught screen acknowledged, scene reset");
        observer.on_reset();
        true
    }

    /// Lay the room out again for a resized panel and put the player back on
    /// the snack station.  The score and the caught overlay are untouched.
    pub fn relayout(&mut self, panel: Size) {
        self.room = Room::layout(panel, self.config.bookshelf_count, &mut self.rng);
        self.config.panel = panel;
        self.player.set_start(self.room.player_start());
        self.player.reset_position();
        debug!(%panel, shelves = self.room.bookshelves.len(), "room laid out");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn current_attention_state(&self) -> AttentionState {
        self.attention.current_state()
    }

    pub fn delivered_count(&self) -> u32 {
        self.coordinator.delivered_count()
    }

    /// `true` while the caught screen is showing.
    pub fn is_caught(&self) -> bool {
        self.overlay.is_active()
    }

    pub fn caught_reason(&self) -> Option<CaughtReason> {
        self.overlay.reason()
    }

    pub fn debug_hitboxes(&self) -> DebugHitboxes {
        DebugHitboxes {
            player:    self.player.hitbox(),
            obstacles: self.room.bookshelves.iter().map(|shelf| shelf.hitbox()).collect(),
        }
    }

    /// Sprite frames the renderer should cycle through for the player.
    pub fn walk_frames(&self) -> WalkCycle {
        self.player.walk_cycle()
    }

    /// Interval at which an [`AttentionTicker`][crate::AttentionTicker]
    /// should call [`tick`][Self::tick].
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.config.tick_period_ms)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn attention(&self) -> &AttentionCycle {
        &self.attention
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn room(&self) -> &Room {
        &self.room
    }
}
