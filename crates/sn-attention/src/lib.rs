//! `sn-attention` — the librarian's attention cycle.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`state`]      | `AttentionState` enum                                   |
//! | [`milestones`] | `Milestones`: the three per-state durations of a cycle |
//! | [`cycle`]      | `AttentionCycle`: the timed state machine              |
//!
//! # Cycle
//!
//! ```text
//! Inattentive ──(to_transition_ms)──▶ Transitioning
//!      ▲                                   │
//!      │                          (to_attentive_ms)
//!  (to_reset_ms, redraw)                   ▼
//!      └─────────────────────────────── Attentive
//! ```
//!
//! Each duration is measured from the moment its state was entered, not from
//! the start of the cycle.

pub mod cycle;
pub mod milestones;
pub mod state;


pub use cycle::AttentionCycle;
pub use milestones::Milestones;
pub use state::AttentionState;
