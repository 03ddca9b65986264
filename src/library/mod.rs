//! The library registry: catalog and member records plus the lend/return workflow.

pub mod error;
pub mod search;

pub use error::*;
pub use search::*;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::LibraryConfig;
use crate::framework::Registry;
use crate::model::{
    ItemCreate, ItemId, ItemInfo, LibraryItem, Member, MemberId, MemberInfo,
};

/// Source of the current time for due dates, overdue checks, and fines.
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Top-level registry of items and members.
///
/// Items refer to their borrower by [`MemberId`]; snapshots resolve that id against the
/// member registry so `borrowed_by` always carries the member's current `{id, name}`.
pub struct Library {
    items: Registry<LibraryItem>,
    members: Registry<Member>,
    config: LibraryConfig,
    clock: Clock,
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("items", &self.items)
            .field("members", &self.members)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    /// Creates an empty library with the default lending policy and the system clock.
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        Self::with_clock(config, Utc::now)
    }

    /// Creates an empty library that reads the current time from `clock`.
    pub fn with_clock(
        config: LibraryConfig,
        clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: Registry::new(),
            members: Registry::new(),
            config,
            clock: Box::new(clock),
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    // ---------------------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------------------

    /// Adds `item` to the catalog. An item with the same id is replaced.
    pub fn add_item(&mut self, item: LibraryItem) -> ItemId {
        let id = item.id();
        debug!(?item, "add_item called");
        if self.items.insert(item).is_some() {
            debug!(item_id = %id, "Replaced existing item");
        }
        info!(item_id = %id, size = self.items.len(), "Item added");
        id
    }

    /// Builds an item from a loosely-typed payload and adds it.
    ///
    /// # Errors
    /// [`LibraryError::Validation`] if `params.kind` is not a known item kind.
    pub fn create_item(&mut self, params: ItemCreate) -> Result<ItemId, LibraryError> {
        let item = LibraryItem::from_create_params(params).map_err(|e| {
            warn!(error = %e, "Create item failed");
            LibraryError::Validation(e.to_string())
        })?;
        Ok(self.add_item(item))
    }

    /// Removes an item from the catalog and returns it.
    ///
    /// # Errors
    /// - [`LibraryError::ItemNotFound`] if no such item exists.
    /// - [`LibraryError::ItemOnLoan`] if the item is currently borrowed.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<LibraryItem, LibraryError> {
        let item = self.items.get(&item_id).ok_or_else(|| {
            warn!(%item_id, "Not found");
            LibraryError::ItemNotFound(item_id)
        })?;
        if item.is_borrowed() {
            warn!(%item_id, borrowed_by = ?item.borrowed_by(), "Refusing to remove item on loan");
            return Err(LibraryError::ItemOnLoan(item_id));
        }

        let removed = self
            .items
            .remove(&item_id)
            .ok_or(LibraryError::ItemNotFound(item_id))?;
        info!(%item_id, size = self.items.len(), "Item removed");
        Ok(removed)
    }

    /// Returns snapshots of every item matching `query`, in catalog order.
    ///
    /// # Errors
    /// [`LibraryError::InvalidSearch`] if no filter is set.
    pub fn search_item(&self, query: &SearchQuery) -> Result<Vec<ItemInfo>, LibraryError> {
        if query.is_empty() {
            warn!("Search without filters");
            return Err(LibraryError::InvalidSearch);
        }

        let found: Vec<ItemInfo> = self
            .items
            .iter()
            .filter(|item| query.matches(item))
            .map(|item| self.item_info(item))
            .collect();
        debug!(?query, hits = found.len(), "Search");
        Ok(found)
    }

    pub fn get_item(&self, item_id: ItemId) -> Result<ItemInfo, LibraryError> {
        self.items
            .get(&item_id)
            .map(|item| self.item_info(item))
            .ok_or(LibraryError::ItemNotFound(item_id))
    }

    /// Snapshots of all items, in catalog order.
    pub fn get_items(&self) -> Vec<ItemInfo> {
        self.items.iter().map(|item| self.item_info(item)).collect()
    }

    // ---------------------------------------------------------------------
    // Members
    // ---------------------------------------------------------------------

    /// Registers a new member and returns their id.
    pub fn create_member(&mut self, name: impl Into<String>) -> MemberId {
        let member = Member::new(name);
        let id = member.id();
        self.members.insert(member);
        info!(member_id = %id, size = self.members.len(), "Member created");
        id
    }

    pub fn get_member(&self, member_id: MemberId) -> Result<MemberInfo, LibraryError> {
        self.members
            .get(&member_id)
            .map(Member::info)
            .ok_or(LibraryError::MemberNotFound(member_id))
    }

    /// Snapshots of all members, in registration order.
    pub fn get_members(&self) -> Vec<MemberInfo> {
        self.members.iter().map(Member::info).collect()
    }

    /// Snapshots of the items `member_id` currently holds, in borrow order.
    pub fn get_borrowed_items(&self, member_id: MemberId) -> Result<Vec<ItemInfo>, LibraryError> {
        let member = self
            .members
            .get(&member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;
        Ok(member
            .borrowed_item_ids()
            .iter()
            .filter_map(|item_id| self.items.get(item_id))
            .map(|item| self.item_info(item))
            .collect())
    }

    // ---------------------------------------------------------------------
    // Lending
    // ---------------------------------------------------------------------

    /// Lends a catalog item to a registered member.
    ///
    /// # Errors
    /// - [`LibraryError::MemberNotFound`] / [`LibraryError::ItemNotFound`] for unknown ids,
    ///   checked in that order.
    /// - [`LibraryError::Config`] if the configured loan period is out of range.
    /// - [`LibraryError::Member`] if the member already holds the item, or the due date
    ///   cannot be represented.
    pub fn lend_item(&mut self, member_id: MemberId, item_id: ItemId) -> Result<(), LibraryError> {
        debug!(%member_id, %item_id, "lend_item called");
        let now = (self.clock)();
        let loan_period = self.config.loan_period().inspect_err(|e| {
            warn!(%member_id, %item_id, error = %e, "Lend refused");
        })?;
        let (member, item) = self.loan_parties(member_id, item_id)?;

        member.borrow_item(item, now, loan_period).inspect_err(|e| {
            warn!(%member_id, %item_id, error = %e, "Lend failed");
        })?;
        info!(%member_id, %item_id, due_date = ?item.due_date(), "Item lent");
        Ok(())
    }

    /// Takes a catalog item back from a registered member.
    ///
    /// # Errors
    /// - [`LibraryError::MemberNotFound`] / [`LibraryError::ItemNotFound`] for unknown ids,
    ///   checked in that order.
    /// - [`LibraryError::Member`] if the member does not hold the item.
    pub fn return_item(&mut self, member_id: MemberId, item_id: ItemId) -> Result<(), LibraryError> {
        debug!(%member_id, %item_id, "return_item called");
        let (member, item) = self.loan_parties(member_id, item_id)?;

        member.return_item(item).inspect_err(|e| {
            warn!(%member_id, %item_id, error = %e, "Return failed");
        })?;
        info!(%member_id, %item_id, "Item returned");
        Ok(())
    }

    /// Whether the item is past due right now.
    pub fn is_overdue(&self, item_id: ItemId) -> Result<bool, LibraryError> {
        let item = self
            .items
            .get(&item_id)
            .ok_or(LibraryError::ItemNotFound(item_id))?;
        Ok(item.is_overdue((self.clock)())?)
    }

    /// Fine currently owed on the item.
    pub fn calculate_fine(&self, item_id: ItemId) -> Result<u64, LibraryError> {
        let item = self
            .items
            .get(&item_id)
            .ok_or(LibraryError::ItemNotFound(item_id))?;
        Ok(item.calculate_fine((self.clock)(), &self.config.fines)?)
    }

    /// Snapshots of every borrowed item that is past due, in catalog order.
    pub fn get_overdue_items(&self) -> Vec<ItemInfo> {
        let now = (self.clock)();
        let overdue: Vec<ItemInfo> = self
            .items
            .iter()
            .filter(|item| item.is_overdue(now).unwrap_or(false))
            .map(|item| self.item_info(item))
            .collect();
        debug!(count = overdue.len(), "Overdue items");
        overdue
    }

    fn loan_parties(
        &mut self,
        member_id: MemberId,
        item_id: ItemId,
    ) -> Result<(&mut Member, &mut LibraryItem), LibraryError> {
        let member = self.members.get_mut(&member_id).ok_or_else(|| {
            warn!(%member_id, "Member not found");
            LibraryError::MemberNotFound(member_id)
        })?;
        let item = self.items.get_mut(&item_id).ok_or_else(|| {
            warn!(%item_id, "Item not found");
            LibraryError::ItemNotFound(item_id)
        })?;
        Ok((member, item))
    }

    fn item_info(&self, item: &LibraryItem) -> ItemInfo {
        let borrower = item.borrowed_by().and_then(|id| self.members.get(&id));
        item.info(borrower)
    }
}
