use serde::{Deserialize, Serialize};

use crate::model::{ItemId, LibraryItem};

/// Per-field catalog search filters.
///
/// Every filter that is set must match exactly. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub id: Option<ItemId>,
    pub title: Option<String>,
    pub author_name: Option<String>,
}

impl SearchQuery {
    pub fn by_id(id: ItemId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn by_author(author_name: impl Into<String>) -> Self {
        Self {
            author_name: Some(author_name.into()),
            ..Self::default()
        }
    }

    pub fn and_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn and_author(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.title().is_none() && self.author_name().is_none()
    }

    pub fn matches(&self, item: &LibraryItem) -> bool {
        self.id.map_or(true, |id| item.id() == id)
            && self.title().map_or(true, |title| item.title() == title)
            && self.author_name().map_or(true, |author| item.author_name() == author)
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref().filter(|author| !author.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> LibraryItem {
        LibraryItem::book("Dune", "1965", "Frank Herbert", "978-0441013593")
    }

    #[test]
    fn empty_strings_count_as_unset() {
        assert!(SearchQuery::default().is_empty());
        assert!(SearchQuery::by_title("").and_author("").is_empty());
        assert!(!SearchQuery::by_author("Frank Herbert").is_empty());
    }

    #[test]
    fn all_set_filters_must_match() {
        let item = item();

        assert!(SearchQuery::by_title("Dune").matches(&item));
        assert!(SearchQuery::by_title("Dune").and_author("Frank Herbert").matches(&item));
        assert!(SearchQuery::by_id(item.id()).and_title("Dune").matches(&item));
        assert!(!SearchQuery::by_title("Dune").and_author("Brian Herbert").matches(&item));
        assert!(!SearchQuery::by_id(ItemId::new()).matches(&item));
    }

    #[test]
    fn deserializes_partial_query() {
        let item = item();
        let raw = format!(r#"{{"id": "{}", "title": ""}}"#, item.id());

        let query: SearchQuery = serde_json::from_str(&raw).unwrap();

        assert_eq!(query, SearchQuery { id: Some(item.id()), title: Some(String::new()), author_name: None });
        assert!(!query.is_empty());
        assert!(query.matches(&item));

        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn matching_is_exact() {
        let item = item();

        assert!(!SearchQuery::by_title("dune").matches(&item));
        assert!(!SearchQuery::by_title("Dun").matches(&item));
    }
}
