//! The controller event loop.
//!
//! # Architecture Note
//! This is the "server" half of the actor pair. It owns [`CatalogState`] and
//! the receiver end of the channel; every state mutation happens inside
//! `run()`, one message at a time, so the state needs no locks.
//!
//! Mutations are *not* handled inline: each one is spawned as its own task
//! so that overlapping writes stay overlapping. The task performs the HTTP
//! call, re-lists the collection
//! on success, posts the refresh back via a loopback sender, and reports the
//! outcome to the [`NotificationSink`]. Only the posted message touches the
//! state.
//!
//! The loopback sender is held weakly: if every handle is dropped while a
//! mutation is in flight, the loop exits, the task's refresh has nowhere to
//! go, and its result is discarded. There is no cancellation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::model::ProductId;
use crate::notify::{Notification, NotificationSink};
use crate::remote::{ApiError, CatalogApi};

use super::handle::CatalogHandle;
use super::message::{CatalogRequest, MutationOp};
use super::state::CatalogState;

/// Dependencies injected at runtime via [`CatalogController::run`], after
/// construction. Late binding keeps the controller constructible before its
/// collaborators exist.
pub struct ControllerContext {
    pub api: Arc<dyn CatalogApi>,
    pub sink: Arc<dyn NotificationSink>,
}

/// The actor owning the catalog replica.
pub struct CatalogController {
    receiver: mpsc::Receiver<CatalogRequest>,
    loopback: mpsc::WeakSender<CatalogRequest>,
    state: CatalogState,
}

impl CatalogController {
    /// Creates a controller and its handle.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, CatalogHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let controller = Self {
            receiver,
            loopback: sender.downgrade(),
            state: CatalogState::new(),
        };
        (controller, CatalogHandle::new(sender))
    }

    /// Runs the event loop until every handle is dropped.
    ///
    /// Kicks off the initial `list()` immediately (`Initial -> Loading`),
    /// then processes requests until the channel closes.
    pub async fn run(mut self, context: ControllerContext) {
        info!("Catalog controller started");

        self.state.begin_loading();
        Self::spawn_refresh(context.api.clone(), self.loopback.clone(), true);

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Snapshot { respond_to } => {
                    debug!(status = ?self.state.status(), "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
                CatalogRequest::Mutate { op } => {
                    debug!(kind = %op.kind(), "Mutation dispatched");
                    self.spawn_mutation(&context, op);
                }
                CatalogRequest::ApplyRefresh { outcome, initial } => match outcome {
                    Ok(products) => {
                        info!(count = products.len(), initial, "Catalog refreshed");
                        self.state.apply_loaded(products);
                    }
                    Err(error) => {
                        warn!(%error, initial, "Catalog refresh failed");
                        self.state.apply_failed(error.to_string());
                    }
                },
            }
        }

        info!(size = self.state.products().len(), "Catalog controller shutdown");
    }

    /// List the collection in a background task and post the result back.
    fn spawn_refresh(
        api: Arc<dyn CatalogApi>,
        loopback: mpsc::WeakSender<CatalogRequest>,
        initial: bool,
    ) {
        tokio::spawn(async move {
            let outcome = api.list().await;
            if let Some(sender) = loopback.upgrade() {
                let _ = sender
                    .send(CatalogRequest::ApplyRefresh { outcome, initial })
                    .await;
            }
        });
    }

    /// Run one mutation as an independent task.
    ///
    /// On success the task re-lists the collection and posts the refresh
    /// *before* notifying the sink, so a snapshot requested after the
    /// notification is guaranteed to observe the refreshed replica. On
    /// failure the state is never touched; the sink alone hears about it.
    fn spawn_mutation(&self, context: &ControllerContext, op: MutationOp) {
        let api = context.api.clone();
        let sink = context.sink.clone();
        let loopback = self.loopback.clone();
        let kind = op.kind();

        tokio::spawn(async move {
            match Self::execute(api.as_ref(), op).await {
                Ok(id) => {
                    let outcome = api.list().await;
                    if let Some(sender) = loopback.upgrade() {
                        let _ = sender
                            .send(CatalogRequest::ApplyRefresh {
                                outcome,
                                initial: false,
                            })
                            .await;
                    }
                    sink.notify(Notification::success(kind, id));
                }
                Err(error) => {
                    warn!(%kind, %error, "Mutation failed");
                    sink.notify(Notification::failure(kind, error.to_string()));
                }
            }
        });
    }

    async fn execute(api: &dyn CatalogApi, op: MutationOp) -> Result<ProductId, ApiError> {
        match op {
            MutationOp::Create { draft } => api.create(&draft).await.map(|p| p.id),
            MutationOp::Replace { id, draft } => api.replace(id, &draft).await.map(|p| p.id),
            MutationOp::Patch { id, patch } => api.patch(id, &patch).await.map(|p| p.id),
            MutationOp::Remove { id } => api.remove(id).await.map(|_| id),
        }
    }
}
