use tokio::sync::oneshot;

use crate::library::{LibraryError, SearchQuery};
use crate::model::{ItemCreate, ItemId, ItemInfo, LibraryItem, MemberId, MemberInfo};

/// Type alias for the one-shot reply channel used by the library actor.
pub type Response<T> = oneshot::Sender<Result<T, LibraryError>>;

/// Message sent to the [`LibraryActor`](super::LibraryActor).
///
/// One variant per [`Library`](crate::library::Library) operation. Each carries the
/// operation's arguments and a reply channel typed to the operation's result.
#[derive(Debug)]
pub enum LibraryRequest {
    AddItem {
        item: LibraryItem,
        respond_to: Response<ItemId>,
    },
    CreateItem {
        params: ItemCreate,
        respond_to: Response<ItemId>,
    },
    RemoveItem {
        item_id: ItemId,
        respond_to: Response<()>,
    },
    SearchItem {
        query: SearchQuery,
        respond_to: Response<Vec<ItemInfo>>,
    },
    GetItem {
        item_id: ItemId,
        respond_to: Response<ItemInfo>,
    },
    GetItems {
        respond_to: Response<Vec<ItemInfo>>,
    },
    CreateMember {
        name: String,
        respond_to: Response<MemberId>,
    },
    GetMember {
        member_id: MemberId,
        respond_to: Response<MemberInfo>,
    },
    GetMembers {
        respond_to: Response<Vec<MemberInfo>>,
    },
    GetBorrowedItems {
        member_id: MemberId,
        respond_to: Response<Vec<ItemInfo>>,
    },
    LendItem {
        member_id: MemberId,
        item_id: ItemId,
        respond_to: Response<()>,
    },
    ReturnItem {
        member_id: MemberId,
        item_id: ItemId,
        respond_to: Response<()>,
    },
    IsOverdue {
        item_id: ItemId,
        respond_to: Response<bool>,
    },
    CalculateFine {
        item_id: ItemId,
        respond_to: Response<u64>,
    },
    GetOverdueItems {
        respond_to: Response<Vec<ItemInfo>>,
    },
}

impl LibraryRequest {
    /// Operation name used in log events.
    pub fn operation(&self) -> &'static str {
        match self {
            LibraryRequest::AddItem { .. } => "add_item",
            LibraryRequest::CreateItem { .. } => "create_item",
            LibraryRequest::RemoveItem { .. } => "remove_item",
            LibraryRequest::SearchItem { .. } => "search_item",
            LibraryRequest::GetItem { .. } => "get_item",
            LibraryRequest::GetItems { .. } => "get_items",
            LibraryRequest::CreateMember { .. } => "create_member",
            LibraryRequest::GetMember { .. } => "get_member",
            LibraryRequest::GetMembers { .. } => "get_members",
            LibraryRequest::GetBorrowedItems { .. } => "get_borrowed_items",
            LibraryRequest::LendItem { .. } => "lend_item",
            LibraryRequest::ReturnItem { .. } => "return_item",
            LibraryRequest::IsOverdue { .. } => "is_overdue",
            LibraryRequest::CalculateFine { .. } => "calculate_fine",
            LibraryRequest::GetOverdueItems { .. } => "get_overdue_items",
        }
    }
}
