use sn_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid game setup: {0}")]
    Setup(#[from] CoreError),

    #[error("failed to spawn attention ticker: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
