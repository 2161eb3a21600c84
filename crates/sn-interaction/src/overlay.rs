//! The caught-screen guard.

use crate::CaughtReason;

/// Whether a caught screen is currently shown.
///
/// Owned by the UI collaborator and lent to the coordinator on every move.
/// The coordinator activates it when it reports a catch and refuses to report
/// another while it is active; only the UI clears it, once the player has
/// acknowledged the screen.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct CaughtOverlay {
    reason: Option<CaughtReason>,
}

impl CaughtOverlay {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.reason.is_some()
    }

    /// The catch being displayed, if any.
    #[inline]
    pub fn reason(&self) -> Option<CaughtReason> {
        self.reason
    }

    pub fn activate(&mut self, reason: CaughtReason) {
        self.reason = Some(reason);
    }

    /// Dismiss the caught screen.
    pub fn clear(&mut self) {
        self.reason = None;
    }
}
