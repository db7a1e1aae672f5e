//! The runtime orchestrator for the catalog controller.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::CatalogConfig;
use crate::controller::{CatalogController, CatalogHandle, ControllerContext};
use crate::notify::{NotificationSink, TracingSink};
use crate::remote::{CatalogApi, RemoteCatalogClient};

/// A running catalog system: the controller task plus the handle to it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::from_env());
/// let state = system.handle.snapshot().await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Handle for reading state and requesting mutations.
    pub handle: CatalogHandle,
    /// Task handle for the controller loop (used for graceful shutdown).
    controller: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Builds the REST client from `config` and starts the controller with
    /// the default tracing sink.
    pub fn new(config: &CatalogConfig) -> Self {
        let api = Arc::new(RemoteCatalogClient::from_config(config));
        Self::with_parts(api, Arc::new(TracingSink), config.queue_capacity)
    }

    /// Starts the controller against explicit collaborators.
    ///
    /// This is the seam tests use to substitute
    /// [`MockCatalog`](crate::mock::MockCatalog) and a recording sink.
    pub fn with_parts(
        api: Arc<dyn CatalogApi>,
        sink: Arc<dyn NotificationSink>,
        queue_capacity: usize,
    ) -> Self {
        let (controller, handle) = CatalogController::new(queue_capacity);
        let task = tokio::spawn(controller.run(ControllerContext { api, sink }));
        Self {
            handle,
            controller: task,
        }
    }

    /// Gracefully shuts the system down.
    ///
    /// Drops the owned handle (callers must drop their clones too) and
    /// waits for the controller task. Returns an error if the task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");
        drop(self.handle);
        if let Err(e) = self.controller.await {
            error!("Controller task failed: {:?}", e);
            return Err(format!("Controller task failed: {:?}", e));
        }
        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
