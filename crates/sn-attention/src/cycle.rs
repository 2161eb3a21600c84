//! The timed attention-state machine.

use sn_core::{AttentionConfig, CoreResult, GameRng, Timestamp};
use tracing::debug;

use crate::{AttentionState, Milestones};

/// The librarian's attention cycle.
///
/// Advanced by an external clock through [`tick`][Self::tick].  Each state
/// has its own duration (see [`Milestones`]) measured from the timestamp at
/// which that state was entered; the reference timestamp is reset on every
/// transition.  Completing a cycle (`Attentive → Inattentive`) redraws all
/// three durations.
///
/// Construction validates the configured ranges.  After that the machine
/// cannot fail.
pub struct AttentionCycle {
    config:           AttentionConfig,
    rng:              GameRng,
    state:            AttentionState,
    entered_at:       Timestamp,
    milestones:       Milestones,
    cycles_completed: u64,
}

impl AttentionCycle {
    /// Start a fresh cycle in `Inattentive` at `now`.
    pub fn new(config: AttentionConfig, mut rng: GameRng, now: Timestamp) -> CoreResult<Self> {
        config.validate()?;
        let milestones = Milestones::draw(&config, &mut rng);
        debug!(?milestones, %now, "attention cycle started");
        Ok(Self {
            config,
            rng,
            state: AttentionState::Inattentive,
            entered_at: now,
            milestones,
            cycles_completed: 0,
        })
    }

    /// Advance the machine to `now`.
    ///
    /// Moves at most one state forward per call and returns the state that
    /// was entered, if any.  Calling again with the same `now` never changes
    /// state a second time, because the fresh state has zero elapsed time and
    /// every duration is positive.  A `now` earlier than the entry timestamp
    /// counts as zero elapsed.
    pub fn tick(&mut self, now: Timestamp) -> Option<AttentionState> {
        let elapsed = now.since(self.entered_at);
        if elapsed < self.milestones.duration_of(self.state) {
            return None;
        }

        let next = self.state.next();
        if next == AttentionState::Inattentive {
            self.milestones = Milestones::draw(&self.config, &mut self.rng);
            self.cycles_completed += 1;
        }
        debug!(
            from = %self.state,
            to = %next,
            elapsed_ms = elapsed,
            %now,
            "librarian attention changed"
        );
        self.state = next;
        self.entered_at = now;
        Some(next)
    }

    #[inline]
    pub fn current_state(&self) -> AttentionState {
        self.state
    }

    #[inline]
    pub fn is_attentive(&self) -> bool {
        self.state == AttentionState::Attentive
    }

    /// Durations for the cycle in progress.
    #[inline]
    pub fn milestones(&self) -> &Milestones {
        &self.milestones
    }

    /// When the current state was entered.
    #[inline]
    pub fn state_entered_at(&self) -> Timestamp {
        self.entered_at
    }

    #[inline]
    pub fn elapsed_in_state(&self, now: Timestamp) -> u64 {
        now.since(self.entered_at)
    }

    /// Milliseconds until the next transition (0 if it is already due).
    pub fn remaining_in_state(&self, now: Timestamp) -> u64 {
        self.milestones
            .duration_of(self.state)
            .saturating_sub(self.elapsed_in_state(now))
    }

    /// Number of `Attentive → Inattentive` wraparounds so far.
    #[inline]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }
}
