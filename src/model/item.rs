use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ItemId, MemberId};

/// Represents an item in the library's collection.
///
/// # Record Management
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored in a [`Registry`](crate::framework::Registry).
///
/// See the [`item`](crate::item) module for overdue checks, fines, and snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryItem {
    id: ItemId,
    title: String,
    author_name: String,
    pub_year: String,
    details: ItemDetails,
    is_borrowed: bool,
    borrowed_by: Option<MemberId>,
    due_date: Option<DateTime<Utc>>,
}

/// The kind-specific part of an item. Each kind carries exactly one extra field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemDetails {
    Book {
        #[serde(rename = "ISBN")]
        isbn: String,
    },
    Magazine {
        issue_no: String,
    },
    Dvd {
        duration: String,
    },
}

/// Item kind discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Book,
    Magazine,
    Dvd,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::Book => write!(f, "book"),
            ItemType::Magazine => write!(f, "magazine"),
            ItemType::Dvd => write!(f, "dvd"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" => Ok(ItemType::Book),
            "magazine" => Ok(ItemType::Magazine),
            "dvd" => Ok(ItemType::Dvd),
            _ => Err(format!("Unknown item type: {}", s)),
        }
    }
}

impl ItemDetails {
    /// Builds the details for `item_type`, using `value` as its one extra field.
    pub fn new(item_type: ItemType, value: impl Into<String>) -> Self {
        match item_type {
            ItemType::Book => ItemDetails::Book { isbn: value.into() },
            ItemType::Magazine => ItemDetails::Magazine {
                issue_no: value.into(),
            },
            ItemType::Dvd => ItemDetails::Dvd {
                duration: value.into(),
            },
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            ItemDetails::Book { .. } => ItemType::Book,
            ItemDetails::Magazine { .. } => ItemType::Magazine,
            ItemDetails::Dvd { .. } => ItemType::Dvd,
        }
    }
}

/// Payload for creating a new item from loosely-typed input.
///
/// `kind` is one of `"book"`, `"magazine"` or `"dvd"`; `detail` fills that kind's extra
/// field (ISBN, issue number, or duration).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub kind: String,
    pub title: String,
    pub author_name: String,
    pub pub_year: String,
    pub detail: String,
}

impl LibraryItem {
    /// Creates a new, not borrowed item with a fresh id.
    ///
    /// # Arguments
    /// * `title` - Title of the item
    /// * `pub_year` - Year the item was published
    /// * `author_name` - Author, editor, or director
    /// * `details` - The kind and its extra field
    pub fn new(
        title: impl Into<String>,
        pub_year: impl Into<String>,
        author_name: impl Into<String>,
        details: ItemDetails,
    ) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            author_name: author_name.into(),
            pub_year: pub_year.into(),
            details,
            is_borrowed: false,
            borrowed_by: None,
            due_date: None,
        }
    }

    pub fn book(
        title: impl Into<String>,
        pub_year: impl Into<String>,
        author_name: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::new(title, pub_year, author_name, ItemDetails::Book { isbn: isbn.into() })
    }

    pub fn magazine(
        title: impl Into<String>,
        pub_year: impl Into<String>,
        author_name: impl Into<String>,
        issue_no: impl Into<String>,
    ) -> Self {
        Self::new(
            title,
            pub_year,
            author_name,
            ItemDetails::Magazine {
                issue_no: issue_no.into(),
            },
        )
    }

    pub fn dvd(
        title: impl Into<String>,
        pub_year: impl Into<String>,
        author_name: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self::new(
            title,
            pub_year,
            author_name,
            ItemDetails::Dvd {
                duration: duration.into(),
            },
        )
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn pub_year(&self) -> &str {
        &self.pub_year
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn item_type(&self) -> ItemType {
        self.details.item_type()
    }

    pub fn is_borrowed(&self) -> bool {
        self.is_borrowed
    }

    pub fn borrowed_by(&self) -> Option<MemberId> {
        self.borrowed_by
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    // Loan fields are written only by `Member::borrow_item` / `Member::return_item`,
    // which keep all three set or cleared together.

    pub(crate) fn set_is_borrowed(&mut self, value: bool) {
        self.is_borrowed = value;
    }

    pub(crate) fn set_due_date(&mut self, value: Option<DateTime<Utc>>) {
        self.due_date = value;
    }

    pub(crate) fn set_borrowed_by(&mut self, value: Option<MemberId>) {
        self.borrowed_by = value;
    }
}
