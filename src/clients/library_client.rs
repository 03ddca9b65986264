use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::library::SearchQuery;
use crate::model::{ItemCreate, ItemId, ItemInfo, LibraryItem, MemberId, MemberInfo};
use crate::service::{LibraryRequest, Response, ServiceError};

/// Client for interacting with the [`LibraryActor`](crate::service::LibraryActor).
///
/// Cheap to clone; every clone talks to the same actor. The actor shuts down once the
/// last clone is dropped.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    sender: mpsc::Sender<LibraryRequest>,
}

impl LibraryClient {
    pub fn new(sender: mpsc::Sender<LibraryRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        request: impl FnOnce(Response<T>) -> LibraryRequest,
    ) -> Result<T, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        Ok(response.await.map_err(|_| ServiceError::ActorDropped)??)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    pub async fn add_item(&self, item: LibraryItem) -> Result<ItemId, ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| LibraryRequest::AddItem { item, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<ItemId, ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| LibraryRequest::CreateItem { params, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: ItemId) -> Result<(), ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| LibraryRequest::RemoveItem { item_id, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn search_item(&self, query: SearchQuery) -> Result<Vec<ItemInfo>, ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| LibraryRequest::SearchItem { query, respond_to }).await
    }

    pub async fn get_item(&self, item_id: ItemId) -> Result<ItemInfo, ServiceError> {
        self.call(|respond_to| LibraryRequest::GetItem { item_id, respond_to }).await
    }

    pub async fn get_items(&self) -> Result<Vec<ItemInfo>, ServiceError> {
        self.call(|respond_to| LibraryRequest::GetItems { respond_to }).await
    }

    #[instrument(skip(self, name))]
    pub async fn create_member(&self, name: impl Into<String>) -> Result<MemberId, ServiceError> {
        debug!("Sending request");
        let name = name.into();
        self.call(|respond_to| LibraryRequest::CreateMember { name, respond_to }).await
    }

    pub async fn get_member(&self, member_id: MemberId) -> Result<MemberInfo, ServiceError> {
        self.call(|respond_to| LibraryRequest::GetMember { member_id, respond_to }).await
    }

    pub async fn get_members(&self) -> Result<Vec<MemberInfo>, ServiceError> {
        self.call(|respond_to| LibraryRequest::GetMembers { respond_to }).await
    }

    pub async fn get_borrowed_items(&self, member_id: MemberId) -> Result<Vec<ItemInfo>, ServiceError> {
        self.call(|respond_to| LibraryRequest::GetBorrowedItems { member_id, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn lend_item(&self, member_id: MemberId, item_id: ItemId) -> Result<(), ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| LibraryRequest::LendItem { member_id, item_id, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn return_item(&self, member_id: MemberId, item_id: ItemId) -> Result<(), ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| LibraryRequest::ReturnItem { member_id, item_id, respond_to }).await
    }

    pub async fn is_overdue(&self, item_id: ItemId) -> Result<bool, ServiceError> {
        self.call(|respond_to| LibraryRequest::IsOverdue { item_id, respond_to }).await
    }

    pub async fn calculate_fine(&self, item_id: ItemId) -> Result<u64, ServiceError> {
        self.call(|respond_to| LibraryRequest::CalculateFine { item_id, respond_to }).await
    }

    pub async fn get_overdue_items(&self) -> Result<Vec<ItemInfo>, ServiceError> {
        self.call(|respond_to| LibraryRequest::GetOverdueItems { respond_to }).await
    }
}
