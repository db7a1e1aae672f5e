//! Runtime configuration for the catalog system.

use std::env;

/// Default collection endpoint, matching the reference deployment.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

const BASE_URL_ENV: &str = "CATALOG_API_URL";

/// Settings for building a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the remote collection; `/products` is appended per operation.
    pub base_url: String,
    /// Capacity of the controller's request channel.
    pub queue_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            queue_capacity: 32,
        }
    }
}

impl CatalogConfig {
    /// Defaults, with the base URL overridable via `CATALOG_API_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_reference_endpoint() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert!(config.queue_capacity > 0);
    }
}
