//! Error types for board-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid session: {0}")]
    InvalidSession(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
