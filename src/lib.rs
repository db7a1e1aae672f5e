//! # Catalog Sync
//!
//! Client-side synchronization core for a remote product collection. It
//! owns a local replica of the catalog, drives its loading/error lifecycle,
//! and keeps it consistent across CRUD mutations issued against an external
//! REST service.
//!
//! ## Architecture
//!
//! - **[`model`]** - pure data: [`Product`](model::Product) and its
//!   write-side shapes.
//! - **[`remote`]** - the [`CatalogApi`](remote::CatalogApi) seam and the
//!   reqwest-backed [`RemoteCatalogClient`](remote::RemoteCatalogClient):
//!   one round trip per operation, no retries, no caching.
//! - **[`controller`]** - the
//!   [`CatalogController`](controller::CatalogController) actor owning
//!   [`CatalogState`](controller::CatalogState), and the
//!   [`CatalogHandle`](controller::CatalogHandle) a View calls.
//! - **[`notify`]** - the [`NotificationSink`](notify::NotificationSink)
//!   collaborator that surfaces mutation outcomes to the user.
//! - **[`lifecycle`]** - [`CatalogSystem`](lifecycle::CatalogSystem)
//!   orchestration and tracing setup.
//! - **[`mock`]** - scripted in-memory API and recording sink for tests.
//!
//! ## Behavior in one paragraph
//!
//! On start the controller loads the collection once (`Initial -> Loading
//! -> Loaded`/`Failed`). Every successful mutation triggers a full re-list
//! so the replica reflects server truth, and reports success to the sink;
//! a failed mutation reports failure and leaves the replica untouched -
//! stale-but-valid data stays visible, and no rollback is needed because
//! no optimistic update was applied. Overlapping mutations race their
//! refreshes; the last refresh to complete wins. See [`controller`] for the
//! consistency model.
//!
//! ## Quick start
//!
//! ```ignore
//! use catalog_sync::config::CatalogConfig;
//! use catalog_sync::lifecycle::{setup_tracing, CatalogSystem};
//!
//! setup_tracing();
//! let system = CatalogSystem::new(&CatalogConfig::from_env());
//! let state = system.handle.snapshot().await?;
//! ```

pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod notify;
pub mod remote;

pub use config::CatalogConfig;
pub use controller::{CatalogHandle, CatalogState, CatalogStatus, HandleError};
pub use lifecycle::CatalogSystem;
pub use model::{Product, ProductDraft, ProductId, ProductPatch};
pub use notify::{MutationKind, Notification, NotificationSink};
pub use remote::{ApiError, CatalogApi, RemoteCatalogClient};
