//! Error types for library members.

use thiserror::Error;

use crate::model::{ItemId, MemberId};

/// Errors that can occur during member borrow/return operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    /// The member already holds this item.
    #[error("Item {item} already borrowed by member {member}")]
    AlreadyBorrowed { member: MemberId, item: ItemId },

    /// The member does not hold this item.
    #[error("Item {item} was not borrowed by member {member}")]
    NotBorrowed { member: MemberId, item: ItemId },

    /// The due date would fall outside the representable calendar.
    #[error("Due date for item {item} is out of range")]
    DueDateOutOfRange { item: ItemId },
}
