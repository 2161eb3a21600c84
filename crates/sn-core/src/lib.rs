//! `sn-core` — foundational types for the snackademy stealth core.
//!
//! Every other `sn-*` crate depends on this one.  It has no `sn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`time`]     | `Timestamp`, `Clock`, `MonotonicClock`, `ManualClock`   |
//! | [`geom`]     | `Point`, `Size`, `Rect`, `Polygon`                      |
//! | [`rng`]      | `GameRng`                                               |
//! | [`config`]   | `GameConfig`, `AttentionConfig`, `MsRange`              |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AttentionConfig, GameConfig, MsRange};
pub use error::{CoreError, CoreResult};
pub use geom::{Point, Polygon, Rect, Size};
pub use rng::GameRng;
pub use time::{Clock, ManualClock, MonotonicClock, Timestamp};
