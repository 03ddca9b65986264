use tracing::{error, info};

use crate::clients::LibraryClient;
use crate::config::LibraryConfig;
use crate::library::Library;
use crate::service::{LibraryActor, ServiceError};

/// The runtime orchestrator for the library service.
///
/// `LibrarySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the library actor
/// - **Wiring**: Handing out the [`LibraryClient`] that talks to it
///
/// # Example
///
/// ```ignore
/// let system = LibrarySystem::new();
///
/// let member_id = system.client.create_member("Patrick").await?;
/// let item_id = system.client.add_item(LibraryItem::book(..)).await?;
/// system.client.lend_item(member_id, item_id).await?;
///
/// // Gracefully shut down when done
/// let library = system.shutdown().await?;
/// ```
#[derive(Debug)]
pub struct LibrarySystem {
    /// Client for interacting with the library actor
    pub client: LibraryClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<Library>,
}

impl Default for LibrarySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl LibrarySystem {
    /// Starts an empty library with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        Self::with_library(Library::with_config(config))
    }

    /// Starts the actor around an existing library.
    pub fn with_library(library: Library) -> Self {
        let buffer = library.config().channel_buffer;
        let (actor, client) = LibraryActor::new(library, buffer);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the system and returns the library's final state.
    ///
    /// # Shutdown Process
    ///
    /// Dropping this system's client closes the actor's mailbox once every other clone
    /// of the client is gone too. The actor then drains pending requests and exits.
    ///
    /// # Errors
    /// [`ServiceError::ActorFailed`] if the actor task panicked or was cancelled.
    pub async fn shutdown(self) -> Result<Library, ServiceError> {
        info!("Shutting down library system...");
        drop(self.client);

        match self.handle.await {
            Ok(library) => {
                info!("Library system shutdown complete.");
                Ok(library)
            }
            Err(e) => {
                error!("Library actor task failed: {:?}", e);
                Err(ServiceError::ActorFailed(e.to_string()))
            }
        }
    }
}
