//! Session observer trait for the UI, audio, and score collaborators.

use crossbeam_channel::{Receiver, Sender};
use sn_attention::AttentionState;
use sn_core::Timestamp;
use sn_interaction::InteractionOutcome;

/// Callbacks invoked by a [`Session`][crate::Session] when something a
/// collaborator cares about happens.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks run while the session lock is
/// held: keep them short and never lock the session from inside one.
///
/// # Example: caught-screen trigger
///
/// ```rust,ignore
/// struct CaughtScreen { shown: Option<&'static str> }
///
/// impl SessionObserver for CaughtScreen {
///     fn on_outcome(&mut self, outcome: InteractionOutcome, _delivered: u32) {
///         if let InteractionOutcome::Caught(reason) = outcome {
///             self.shown = Some(reason.message());
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// The librarian entered `state` at `now`.  Renderers swap the icon here.
    fn on_attention_changed(&mut self, _now: Timestamp, _state: AttentionState) {}

    /// A movement produced something other than `InteractionOutcome::None`.
    ///
    /// `delivered` is the counter value after the outcome was applied.
    fn on_outcome(&mut self, _outcome: InteractionOutcome, _delivered: u32) {}

    /// The caught screen was acknowledged and the scene was reset.
    fn on_reset(&mut self) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

// ── Channel forwarding ────────────────────────────────────────────────────────

/// Everything a [`SessionObserver`] can be told, as a value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SessionEvent {
    AttentionChanged { at: Timestamp, state: AttentionState },
    Outcome { outcome: InteractionOutcome, delivered: u32 },
    Reset,
}

/// Forwards every callback as a [`SessionEvent`] over a channel, for
/// consumers on other threads (the UI loop, an audio thread).
///
/// Cheap to clone; give one clone to the ticker and keep another for the
/// input path.  Events sent after every receiver is gone are dropped.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: Sender<SessionEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<SessionEvent>) -> Self {
        Self { tx }
    }

    /// An observer plus the receiving end of a fresh unbounded channel.
    pub fn unbounded() -> (Self, Receiver<SessionEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    fn send(&self, event: SessionEvent) {
        // A disconnected receiver means nobody is listening any more.
        let _ = self.tx.send(event);
    }
}

impl SessionObserver for ChannelObserver {
    fn on_attention_changed(&mut self, now: Timestamp, state: AttentionState) {
        self.send(SessionEvent::AttentionChanged { at: now, state });
    }

    fn on_outcome(&mut self, outcome: InteractionOutcome, delivered: u32) {
        self.send(SessionEvent::Outcome { outcome, delivered });
    }

    fn on_reset(&mut self) {
        self.send(SessionEvent::Reset);
    }
}
