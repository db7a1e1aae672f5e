//! # Catalog State Controller
//!
//! The controller owns the local replica of the remote collection and is the
//! only code that ever mutates it. It is the "server" half of an actor pair:
//!
//! - [`CatalogController`] - event loop owning [`CatalogState`], run in its
//!   own task
//! - [`CatalogHandle`] - cloneable client the View calls; reads via
//!   snapshots, writes via fire-and-forget mutation requests
//! - [`CatalogRequest`] / [`MutationOp`] - the messages between them
//!
//! ## Concurrency model
//!
//! All state mutations happen sequentially inside the controller's loop, so
//! `CatalogState` needs no locks. Mutations run as independent spawned
//! tasks; each one that succeeds re-lists the collection and posts the
//! result back as a message. There is no request sequencing or locking, so
//! two overlapping mutations can apply their refreshes out of order and the
//! replica converges to "last refresh to complete wins" - eventual, not
//! linearizable, consistency.

pub mod actor;
pub mod error;
pub mod handle;
pub mod message;
pub mod state;

pub use actor::{CatalogController, ControllerContext};
pub use error::HandleError;
pub use handle::CatalogHandle;
pub use message::{CatalogRequest, MutationOp};
pub use state::{CatalogState, CatalogStatus};
