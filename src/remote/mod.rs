//! # Remote Catalog Access
//!
//! This module owns the seam between the controller and the network:
//!
//! - [`CatalogApi`] - the trait the controller is written against
//! - [`ApiError`] - the failure taxonomy for every remote operation
//! - [`RemoteCatalogClient`] - the reqwest-backed implementation
//!
//! The trait exists so the controller can be exercised against the
//! in-memory [`crate::mock::MockCatalog`] in tests without any network.

pub mod error;
pub mod rest;

pub use error::ApiError;
pub use rest::RemoteCatalogClient;

use async_trait::async_trait;

use crate::model::{Product, ProductDraft, ProductId, ProductPatch};

/// The five operations the remote product collection exposes.
///
/// Each call performs exactly one round trip: no retries, no explicit
/// timeouts, no caching. Implementations hold no mutable state; the only
/// side effect is network I/O.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full collection, in server response order.
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a new product; the returned record carries the server-assigned id.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError>;

    /// Replace the complete record; the server is authoritative for the
    /// returned shape.
    async fn replace(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ApiError>;

    /// Send only the changed fields; the server merges and returns the
    /// resulting full record.
    async fn patch(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, ApiError>;

    /// Delete by id. No payload contract beyond a success status.
    async fn remove(&self, id: ProductId) -> Result<(), ApiError>;
}
