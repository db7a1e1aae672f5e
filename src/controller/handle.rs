//! The View-facing client for the controller.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::model::{ProductDraft, ProductId, ProductPatch};

use super::error::HandleError;
use super::message::{CatalogRequest, MutationOp};
use super::state::CatalogState;

/// Cloneable handle for reading catalog state and requesting mutations.
///
/// Holds only a channel sender, so cloning is cheap. Reads resolve with a
/// state snapshot; writes resolve as soon as the controller has accepted
/// the request - their outcome arrives through the
/// [`NotificationSink`](crate::notify::NotificationSink), never here.
#[derive(Clone)]
pub struct CatalogHandle {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogHandle {
    pub(crate) fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Read the current catalog state.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<CatalogState, HandleError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Snapshot { respond_to })
            .await
            .map_err(|_| HandleError::ControllerClosed)?;
        response.await.map_err(|_| HandleError::ControllerDropped)
    }

    /// Request creation of a new product.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: ProductDraft) -> Result<(), HandleError> {
        debug!(?draft, "Requesting create");
        self.send(MutationOp::Create { draft }).await
    }

    /// Request replacement of the complete record behind `id`.
    #[instrument(skip(self, draft))]
    pub async fn replace(&self, id: ProductId, draft: ProductDraft) -> Result<(), HandleError> {
        debug!(%id, ?draft, "Requesting replace");
        self.send(MutationOp::Replace { id, draft }).await
    }

    /// Request a partial update of the record behind `id`.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: ProductId, patch: ProductPatch) -> Result<(), HandleError> {
        debug!(%id, ?patch, "Requesting patch");
        self.send(MutationOp::Patch { id, patch }).await
    }

    /// Request deletion of the record behind `id`.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: ProductId) -> Result<(), HandleError> {
        debug!(%id, "Requesting remove");
        self.send(MutationOp::Remove { id }).await
    }

    async fn send(&self, op: MutationOp) -> Result<(), HandleError> {
        self.sender
            .send(CatalogRequest::Mutate { op })
            .await
            .map_err(|_| HandleError::ControllerClosed)
    }
}
