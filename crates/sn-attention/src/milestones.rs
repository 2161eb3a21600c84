//! Per-cycle state durations.

use sn_core::{AttentionConfig, GameRng};

use crate::AttentionState;

/// How long the librarian stays in each state during one cycle.
///
/// All three values are durations measured from entry into their own state.
/// A validated [`AttentionConfig`] guarantees each is strictly positive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Milestones {
    pub to_transition_ms: u64,
    pub to_attentive_ms:  u64,
    pub to_reset_ms:      u64,
}

impl Milestones {
    /// Draw all three durations independently and uniformly from `config`.
    ///
    /// `config` must already have passed [`AttentionConfig::validate`].
    pub fn draw(config: &AttentionConfig, rng: &mut GameRng) -> Self {
        let r = &config.inattentive_ms;
        let to_transition_ms = rng.gen_range(r.min..r.max);
        let r = &config.transition_ms;
        let to_attentive_ms = rng.gen_range(r.min..r.max);
        let r = &config.attentive_ms;
        let to_reset_ms = rng.gen_range(r.min..r.max);

        Self { to_transition_ms, to_attentive_ms, to_reset_ms }
    }

    /// Time to spend in `state` before leaving it.
    #[inline]
    pub fn duration_of(&self, state: AttentionState) -> u64 {
        match state {
            AttentionState::Inattentive   => self.to_transition_ms,
            AttentionState::Transitioning => self.to_attentive_ms,
            AttentionState::Attentive     => self.to_reset_ms,
        }
    }

    /// Length of one full cycle.
    #[inline]
    pub fn total_ms(&self) -> u64 {
        self.to_transition_ms + self.to_attentive_ms + self.to_reset_ms
    }
}
