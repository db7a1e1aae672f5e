//! # System Lifecycle & Orchestration
//!
//! Wiring the catalog system is deliberately boring: build the remote
//! client, pick a sink, spawn the controller, hand the caller a handle.
//! [`CatalogSystem`] is that conductor, plus graceful shutdown.
//!
//! ## Shutdown
//!
//! 1. Drop every [`CatalogHandle`](crate::controller::CatalogHandle) clone -
//!    this closes the request channel.
//! 2. The controller's `recv()` returns `None` and the loop exits.
//! 3. `shutdown()` awaits the controller task.
//!
//! In-flight mutation tasks hold only a weak sender back to the loop, so
//! they never keep the system alive; their late results are simply
//! discarded.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging once per process.
//! Log levels are driven by `RUST_LOG` (`info` for lifecycle events,
//! `debug` for full request payloads).

pub mod system;
pub mod tracing;

pub use system::CatalogSystem;
pub use tracing::setup_tracing;
