//! Core error type.
//!
//! The stealth core has no runtime error surface: every error here is a
//! construction-time contract violation (bad milestone ranges, zero tick
//! period, non-positive sizes).  Sub-crates wrap `CoreError` as one variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} must have positive width and height, got {width}x{height}")]
    EmptySize {
        what:   &'static str,
        width:  i32,
        height: i32,
    },
}

/// Shorthand result type for all `sn-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
