//! The closed set of results a movement event can produce.

/// Why a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CaughtReason {
    /// Moved while carrying a snack with the librarian watching.
    AttentionCaught,
    /// Walked into a bookshelf.
    CollisionCaught,
}

impl CaughtReason {
    /// Text for the caught screen.
    pub fn message(self) -> &'static str {
        match self {
            CaughtReason::AttentionCaught => "You were caught by the librarian!",
            CaughtReason::CollisionCaught => "You walked into a bookshelf!",
        }
    }
}

impl std::fmt::Display for CaughtReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CaughtReason::AttentionCaught => "attention",
            CaughtReason::CollisionCaught => "collision",
        })
    }
}

/// Result of one [`on_player_moved`][crate::InteractionCoordinator::on_player_moved]
/// evaluation.  Produced fresh per event and never stored by the core.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum InteractionOutcome {
    #[default]
    None,
    PickedUpSnack,
    DeliveredSnack,
    Caught(CaughtReason),
}

impl InteractionOutcome {
    #[inline]
    pub fn is_caught(self) -> bool {
        matches!(self, InteractionOutcome::Caught(_))
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == InteractionOutcome::None
    }
}
