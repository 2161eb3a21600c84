//! `sn-interaction` — turns player movement into game outcomes.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`actor`]       | `Player`, `Obstacle`, `Direction`, `Facing`                   |
//! | [`walk`]        | `WalkCycle`, `SpriteFrame`: frame sequence for a renderer     |
//! | [`room`]        | `Room`: station, desk, librarian anchor, bookshelves           |
//! | [`overlay`]     | `CaughtOverlay`: UI-owned guard against repeat catches        |
//! | [`outcome`]     | `InteractionOutcome`, `CaughtReason`                          |
//! | [`coordinator`] | `InteractionCoordinator`, `AttentionView`                     |
//!
//! # Evaluation order
//!
//! [`InteractionCoordinator::on_player_moved`] runs once per movement event:
//!
//! ```text
//! ① attentive + carrying        → Caught(AttentionCaught)   stop
//! ② bookshelf polygon overlap   → Caught(CollisionCaught)   stop
//! ③ snack station overlap       → carrying = true; PickedUpSnack on rising edge
//! ④ desk overlap                → DeliveredSnack on rising edge if carrying;
//!                                 carrying = false
//! ⑤ otherwise                   → None
//! ```
//!
//! Caught checks come first so a caught player never scores in the same move.

pub mod actor;
pub mod coordinator;
pub mod outcome;
pub mod overlay;
pub mod room;
pub mod walk;


pub use actor::{Direction, Facing, Obstacle, Player};
pub use coordinator::{AttentionView, InteractionCoordinator};
pub use outcome::{CaughtReason, InteractionOutcome};
pub use overlay::CaughtOverlay;
pub use room::Room;
pub use walk::{SpriteFrame, WalkCycle};
