use crate::clients::{OrderClient, RatingClient};
use tracing::{error, info};

/// The runtime orchestrator for the storefront's actors.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping both actors
/// - **Client Handout**: the HTTP layer and tests borrow its clients
///
/// # Architecture
///
/// Two independent actors, one per resource:
/// - **Order actor**: owns order records and both status machines
/// - **Rating actor**: owns review records and their admin replies
///
/// Neither depends on the other, so both run with an empty context.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new();
///
/// let id = system.order_client.place(params).await?;
/// let order = system.order_client.detail(id, &caller).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Client for interacting with the Rating actor
    pub rating_client: RatingClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Creates and starts the system with both actors running.
    pub fn new() -> Self {
        let (order_actor, order_client) = crate::order_actor::new();
        let (rating_actor, rating_client) = crate::rating_actor::new();

        // Both actors are self-contained (Context = ())
        let order_handle = tokio::spawn(order_actor.run(()));
        let rating_handle = tokio::spawn(rating_actor.run(()));

        Self {
            order_client,
            rating_client,
            handles: vec![order_handle, rating_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the clients, which closes their channels; each actor drains
    /// its mailbox and exits. Returns an error if an actor task panicked.
    ///
    /// Callers must drop any client clones they hold first, or the
    /// channels stay open and this call waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.rating_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for StorefrontSystem {
    fn default() -> Self {
        Self::new()
    }
}
