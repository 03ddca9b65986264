//! Read-only snapshots returned by catalog queries.
//!
//! The serialized field names and nesting are the external contract: `borrowed_by` is
//! either `null` or a nested member snapshot, never a bare id.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::{ItemId, MemberId};
use super::item::ItemDetails;

/// Snapshot of a member: `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberInfo {
    pub id: MemberId,
    pub name: String,
}

/// Snapshot of an item: the base fields followed by the kind's one extra field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemInfo {
    pub id: ItemId,
    pub title: String,
    pub author_name: String,
    pub pub_year: String,
    pub is_borrowed: bool,
    pub borrowed_by: Option<MemberInfo>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub details: ItemDetails,
}
