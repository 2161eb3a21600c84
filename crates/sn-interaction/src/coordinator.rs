//! The per-move interaction coordinator.

use sn_attention::{AttentionCycle, AttentionState};
use sn_spatial::{polygon_intersects_rect, rect_intersects_rect};
use tracing::{debug, info};

use crate::{CaughtOverlay, CaughtReason, InteractionOutcome, Player, Room};

/// Read-only view of whether the librarian is watching.
///
/// Implemented by the live [`AttentionCycle`] and by a bare
/// [`AttentionState`], so callers and tests can pass either.
pub trait AttentionView {
    fn is_attentive(&self) -> bool;
}

impl AttentionView for AttentionCycle {
    #[inline]
    fn is_attentive(&self) -> bool {
        AttentionCycle::is_attentive(self)
    }
}

impl AttentionView for AttentionState {
    #[inline]
    fn is_attentive(&self) -> bool {
        *self == AttentionState::Attentive
    }
}

/// Turns movement events into [`InteractionOutcome`]s.
///
/// Holds only the encounter bookkeeping: the rising-edge flags for the snack
/// station and desk, and the delivered-snack counter.  Positions belong to
/// the actors and the caught flag to the UI.
#[derive(Clone, Debug, Default)]
pub struct InteractionCoordinator {
    at_station: bool,
    at_desk:    bool,
    delivered:  u32,
}

impl InteractionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one movement event.  Call after the player's position has
    /// been updated.
    ///
    /// Order is fixed: attention catch, bookshelf collision, snack pickup,
    /// desk delivery.  A catch returns immediately, so the remaining checks
    /// (and their edge flags) are skipped for that event.  If the player
    /// overlaps the station and the desk at once, the delivery wins.
    pub fn on_player_moved<W>(
        &mut self,
        watcher: &W,
        player:  &mut Player,
        room:    &Room,
        overlay: &mut CaughtOverlay,
    ) -> InteractionOutcome
    where
        W: AttentionView + ?Sized,
    {
        // ① Moving with a snack in plain sight.
        if watcher.is_attentive() && player.is_carrying_snack() && !overlay.is_active() {
            return self.caught(CaughtReason::AttentionCaught, overlay);
        }

        let body = player.hitbox();

        // ② Bookshelf collisions.
        if !overlay.is_active()
            && room
                .bookshelves
                .iter()
                .any(|shelf| polygon_intersects_rect(&shelf.hitbox(), &body))
        {
            return self.caught(CaughtReason::CollisionCaught, overlay);
        }

        let mut outcome = InteractionOutcome::None;

        // ③ Snack station.
        if rect_intersects_rect(&body, &room.snack_station) {
            if !self.at_station {
                self.at_station = true;
                debug!(position = %player.position(), "player reached the snack station");
                outcome = InteractionOutcome::PickedUpSnack;
            }
            player.set_carrying_snack(true);
        } else {
            self.at_station = false;
        }

        // ④ Desk.
        if rect_intersects_rect(&body, &room.desk) {
            if !self.at_desk {
                self.at_desk = true;
                debug!(position = %player.position(), "player reached the desk");
                if player.is_carrying_snack() {
                    self.delivered += 1;
                    info!(delivered = self.delivered, "snack delivered");
                    outcome = InteractionOutcome::DeliveredSnack;
                }
            }
            player.set_carrying_snack(false);
        } else {
            self.at_desk = false;
        }

        outcome
    }

    /// Snacks delivered since the last reset.
    #[inline]
    pub fn delivered_count(&self) -> u32 {
        self.delivered
    }

    /// Zero the counter and forget which stations the player was touching.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn caught(&self, reason: CaughtReason, overlay: &mut CaughtOverlay) -> InteractionOutcome {
        overlay.activate(reason);
        info!(%reason, delivered = self.delivered, "player caught");
        InteractionOutcome::Caught(reason)
    }
}
