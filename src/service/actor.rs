use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::request::LibraryRequest;
use crate::clients::LibraryClient;
use crate::library::{Library, LibraryError};

/// The actor that owns a [`Library`] and serves [`LibraryRequest`]s.
///
/// # Architecture Note
/// This struct is the "Server" half of the service. It owns the library and the receiver
/// end of the channel. Requests are handled one at a time in arrival order, so the library
/// needs no `Mutex` or `RwLock` even when many clients share it.
#[derive(Debug)]
pub struct LibraryActor {
    receiver: mpsc::Receiver<LibraryRequest>,
    library: Library,
}

impl LibraryActor {
    pub fn new(library: Library, buffer_size: usize) -> (Self, LibraryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, library };
        let client = LibraryClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// Returns the library so its final state can be inspected after shutdown.
    pub async fn run(mut self) -> Library {
        info!(
            items = self.library.item_count(),
            members = self.library.member_count(),
            "Library actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            debug!(operation = msg.operation(), "Request");
            self.handle(msg);
        }

        info!(
            items = self.library.item_count(),
            members = self.library.member_count(),
            "Shutdown"
        );
        self.library
    }

    fn handle(&mut self, msg: LibraryRequest) {
        let library = &mut self.library;
        match msg {
            LibraryRequest::AddItem { item, respond_to } => {
                reply(respond_to, Ok(library.add_item(item)));
            }
            LibraryRequest::CreateItem { params, respond_to } => {
                reply(respond_to, library.create_item(params));
            }
            LibraryRequest::RemoveItem { item_id, respond_to } => {
                reply(respond_to, library.remove_item(item_id).map(|_| ()));
            }
            LibraryRequest::SearchItem { query, respond_to } => {
                reply(respond_to, library.search_item(&query));
            }
            LibraryRequest::GetItem { item_id, respond_to } => {
                reply(respond_to, library.get_item(item_id));
            }
            LibraryRequest::GetItems { respond_to } => {
                reply(respond_to, Ok(library.get_items()));
            }
            LibraryRequest::CreateMember { name, respond_to } => {
                reply(respond_to, Ok(library.create_member(name)));
            }
            LibraryRequest::GetMember { member_id, respond_to } => {
                reply(respond_to, library.get_member(member_id));
            }
            LibraryRequest::GetMembers { respond_to } => {
                reply(respond_to, Ok(library.get_members()));
            }
            LibraryRequest::GetBorrowedItems { member_id, respond_to } => {
                reply(respond_to, library.get_borrowed_items(member_id));
            }
            LibraryRequest::LendItem { member_id, item_id, respond_to } => {
                reply(respond_to, library.lend_item(member_id, item_id));
            }
            LibraryRequest::ReturnItem { member_id, item_id, respond_to } => {
                reply(respond_to, library.return_item(member_id, item_id));
            }
            LibraryRequest::IsOverdue { item_id, respond_to } => {
                reply(respond_to, library.is_overdue(item_id));
            }
            LibraryRequest::CalculateFine { item_id, respond_to } => {
                reply(respond_to, library.calculate_fine(item_id));
            }
            LibraryRequest::GetOverdueItems { respond_to } => {
                reply(respond_to, Ok(library.get_overdue_items()));
            }
        }
    }
}

fn reply<T>(respond_to: super::Response<T>, result: Result<T, LibraryError>) {
    if respond_to.send(result).is_err() {
        warn!("Caller went away before the reply was sent");
    }
}
