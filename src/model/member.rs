use super::ids::{ItemId, MemberId};

/// Represents a registered library member.
///
/// # Record Management
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored in a [`Registry`](crate::framework::Registry).
///
/// See the [`member`](crate::member) module for the borrow and return workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    id: MemberId,
    name: String,
    borrowed_items: Vec<ItemId>,
}

impl Member {
    /// Creates a new Member with a fresh id and nothing borrowed.
    ///
    /// # Arguments
    /// * `name` - Member's display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            borrowed_items: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the items this member currently holds, in borrow order.
    pub fn borrowed_item_ids(&self) -> &[ItemId] {
        &self.borrowed_items
    }

    pub fn has_borrowed(&self, item_id: &ItemId) -> bool {
        self.borrowed_items.contains(item_id)
    }

    pub(crate) fn record_borrowed(&mut self, item_id: ItemId) {
        self.borrowed_items.push(item_id);
    }

    pub(crate) fn forget_borrowed(&mut self, item_id: &ItemId) {
        self.borrowed_items.retain(|held| held != item_id);
    }
}
