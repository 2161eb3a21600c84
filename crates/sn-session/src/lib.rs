//! `sn-session` — owner of all game state and driver of both input paths.
//!
//! # Two input paths, one owner
//!
//! ```text
//!   ticker thread (every tick_period_ms)        input path (per key press)
//!            │                                          │
//!            ▼                                          ▼
//!   lock ─▶ Session::tick ─▶ AttentionCycle    lock ─▶ Session::move_player
//!                                                       ├─ Player::step
//!                                                       └─ InteractionCoordinator
//! ```
//!
//! A [`Session`] holds the attention cycle, the player, the room, the
//! coordinator, and the caught overlay.  Share it as a [`SharedSession`]
//! (`Arc<parking_lot::Mutex<Session>>`); both paths hold the lock only for
//! one O(bookshelves) call.
//!
//! [`AttentionTicker`] runs the periodic path on its own thread and stops
//! (and joins) on [`AttentionTicker::stop`] or drop.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sn_core::{GameConfig, MonotonicClock};
//! use sn_interaction::Direction;
//! use sn_session::{AttentionTicker, ChannelObserver, SessionBuilder};
//!
//! let session = SessionBuilder::new(GameConfig::default(), MonotonicClock::new())
//!     .build()?
//!     .into_shared();
//! let period = session.lock().tick_period();
//! let (mut observer, events) = ChannelObserver::unbounded();
//! let ticker = AttentionTicker::spawn(session.clone(), period, observer.clone())?;
//!
//! let outcome = session.lock().move_player(Direction::Right, &mut observer);
//! ticker.stop();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod session;
pub mod ticker;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use observer::{ChannelObserver, NoopObserver, SessionEvent, SessionObserver};
pub use session::{DebugHitboxes, Session, SharedSession};
pub use ticker::AttentionTicker;
