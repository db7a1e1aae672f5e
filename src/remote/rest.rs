//! reqwest-backed implementation of the catalog REST surface.
//!
//! Stateless wrapper over the five collection endpoints. Writes go out as
//! JSON bodies (reqwest's `.json()` sets `Content-Type: application/json`);
//! any non-2xx response is a uniform [`ApiError::Request`] regardless of
//! payload content.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};

use super::{ApiError, CatalogApi};

/// Client for the remote product collection.
///
/// Holds only the reqwest client and the base URL; cheap to clone and
/// share. No request ever retries or caches.
#[derive(Debug, Clone)]
pub struct RemoteCatalogClient {
    client: Client,
    base_url: String,
}

impl RemoteCatalogClient {
    /// Create a client for the given base URL (e.g. `https://fakestoreapi.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Reject non-2xx responses, then decode the body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for RemoteCatalogClient {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        debug!(url = %self.collection_url(), "GET products");
        let response = self.client.get(self.collection_url()).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        debug!(url = %self.collection_url(), "POST product");
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn replace(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ApiError> {
        debug!(url = %self.item_url(id), "PUT product");
        let response = self
            .client
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn patch(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, ApiError> {
        debug!(url = %self.item_url(id), "PATCH product");
        let response = self
            .client
            .patch(self.item_url(id))
            .json(patch)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn remove(&self, id: ProductId) -> Result<(), ApiError> {
        debug!(url = %self.item_url(id), "DELETE product");
        let response = self.client.delete(self.item_url(id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }
        // Body ignored by contract.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_cleanly() {
        let client = RemoteCatalogClient::new("https://fakestoreapi.com");
        assert_eq!(client.collection_url(), "https://fakestoreapi.com/products");
        assert_eq!(
            client.item_url(ProductId(21)),
            "https://fakestoreapi.com/products/21"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RemoteCatalogClient::new("http://localhost:3000/");
        assert_eq!(client.collection_url(), "http://localhost:3000/products");
    }
}
