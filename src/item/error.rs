//! Error types for catalog items.

use thiserror::Error;

use crate::model::ItemId;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// Overdue and fine queries only make sense while the item is on loan.
    #[error("Item not borrowed: {0}")]
    NotBorrowed(ItemId),

    /// The requested item kind is not one of book, magazine, or dvd.
    #[error("Unknown item type: {0}")]
    UnknownType(String),
}
