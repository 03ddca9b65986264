//! Error types for the library service front-end.

use thiserror::Error;

use crate::library::LibraryError;

/// Errors seen by callers of the [`LibraryClient`](crate::clients::LibraryClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The actor's mailbox is closed; it has shut down.
    #[error("Library actor closed")]
    ActorClosed,

    /// The actor dropped the reply channel without answering.
    #[error("Library actor dropped response channel")]
    ActorDropped,

    /// The actor task ended abnormally.
    #[error("Library actor task failed: {0}")]
    ActorFailed(String),

    /// The library rejected the request.
    #[error(transparent)]
    Library(#[from] LibraryError),
}

impl ServiceError {
    /// The library-level error behind this failure, if any.
    pub fn library_error(&self) -> Option<&LibraryError> {
        match self {
            ServiceError::Library(e) => Some(e),
            _ => None,
        }
    }
}
