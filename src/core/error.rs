//! Error types for hotel operations.

use thiserror::Error;

use super::room::RoomId;

/// Errors produced by hotel components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// The hotel was shut down while the caller was blocked or about to block.
    #[error("operation cancelled by shutdown")]
    Cancelled,
    /// A room was returned to the pool without being checked out of it.
    #[error("room {0} is not checked out of the pool")]
    NotCheckedOut(RoomId),
    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// An actor thread could not be spawned.
    #[error("failed to spawn actor: {0}")]
    Spawn(String),
}

impl HotelError {
    /// Whether this error is the expected shutdown signal rather than a fault.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
