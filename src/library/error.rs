//! Error types for the library registry.

use thiserror::Error;

use crate::config::ConfigError;
use crate::item::ItemError;
use crate::member::MemberError;
use crate::model::{ItemId, MemberId};

/// Errors that can occur during library operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibraryError {
    /// The input could not be turned into a catalog record.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No item with this id is in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// No member with this id is registered.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// The item is on loan and cannot be removed from the catalog.
    #[error("Item is on loan: {0}")]
    ItemOnLoan(ItemId),

    /// A search was requested with no filter set.
    #[error("Search requires at least one of id, title, or author_name")]
    InvalidSearch,

    /// The lending policy is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Member(#[from] MemberError),
}

/// Broad classification of a [`LibraryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input of the wrong shape.
    Validation,
    /// A referenced item or member does not exist.
    NotFound,
    /// The operation conflicts with the current loan state.
    StateConflict,
    /// The call itself was malformed.
    BadArgument,
}

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::Validation(_)
            | LibraryError::Config(_)
            | LibraryError::Item(ItemError::UnknownType(_))
            | LibraryError::Member(MemberError::DueDateOutOfRange { .. }) => ErrorKind::Validation,
            LibraryError::ItemNotFound(_) | LibraryError::MemberNotFound(_) => ErrorKind::NotFound,
            LibraryError::ItemOnLoan(_)
            | LibraryError::Item(ItemError::NotBorrowed(_))
            | LibraryError::Member(_) => ErrorKind::StateConflict,
            LibraryError::InvalidSearch => ErrorKind::BadArgument,
        }
    }
}
