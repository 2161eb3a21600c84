/// What the librarian is doing right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AttentionState {
    /// Reading; the player may carry snacks freely.
    #[default]
    Inattentive,
    /// Turning around.  Still safe, but not for long.
    Transitioning,
    /// Watching the room.  Carrying a snack now ends the run.
    Attentive,
}

impl AttentionState {
    /// The state that follows `self` in the cycle.
    #[inline]
    pub fn next(self) -> AttentionState {
        match self {
            AttentionState::Inattentive   => AttentionState::Transitioning,
            AttentionState::Transitioning => AttentionState::Attentive,
            AttentionState::Attentive     => AttentionState::Inattentive,
        }
    }

    /// Stable label, used by renderers to pick the librarian icon.
    pub fn as_str(self) -> &'static str {
        match self {
            AttentionState::Inattentive   => "inattentive",
            AttentionState::Transitioning => "transitioning",
            AttentionState::Attentive     => "attentive",
        }
    }
}

impl std::fmt::Display for AttentionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
