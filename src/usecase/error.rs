//! UseCase layer error definitions.

use thiserror::Error;

/// Errors from joining a room
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The joining connection is not (or no longer) registered
    #[error("connection '{0}' is not registered")]
    NotRegistered(String),
}

/// Errors from relaying a message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The sender has not joined a room yet
    #[error("sender has not joined a room")]
    NotInRoom,
}
