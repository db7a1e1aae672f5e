//! The replica value owned by the controller.

use crate::model::Product;

/// Lifecycle of the local replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Created, load not yet started.
    Initial,
    /// Initial `list()` in flight.
    Loading,
    /// Replica mirrors a successful server response.
    Loaded,
    /// A load or refresh failed; `error` describes why.
    Failed,
}

/// The controller's owned value: products, lifecycle status, and the error
/// description when `Failed`.
///
/// Invariants:
/// - `Loaded` implies no error is present.
/// - `Failed` retains the last successfully loaded products; a failure
///   never clears the replica.
/// - Product order is server response order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    status: CatalogStatus,
    error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            status: CatalogStatus::Initial,
            error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once the initial load has either succeeded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self.status, CatalogStatus::Loaded | CatalogStatus::Failed)
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    /// A `list()` completed: replace the replica with server truth.
    pub(crate) fn apply_loaded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.status = CatalogStatus::Loaded;
        self.error = None;
    }

    /// A load or refresh failed. Products are deliberately left alone so
    /// stale-but-valid data stays visible.
    pub(crate) fn apply_failed(&mut self, error: String) {
        self.status = CatalogStatus::Failed;
        self.error = Some(error);
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: 10.0,
            description: "d".to_string(),
            image: "u".to_string(),
            category: "c".to_string(),
        }
    }

    #[test]
    fn starts_initial_and_empty() {
        let state = CatalogState::new();
        assert_eq!(state.status(), CatalogStatus::Initial);
        assert!(state.products().is_empty());
        assert!(state.error().is_none());
        assert!(!state.is_settled());
    }

    #[test]
    fn loaded_replaces_products_and_clears_error() {
        let mut state = CatalogState::new();
        state.begin_loading();
        state.apply_failed("request failed: 500 Internal Server Error".to_string());
        state.apply_loaded(vec![product(1, "A"), product(2, "B")]);
        assert_eq!(state.status(), CatalogStatus::Loaded);
        assert!(state.error().is_none());
        assert_eq!(state.products().len(), 2);
        assert_eq!(state.products()[0].id, ProductId(1));
    }

    #[test]
    fn failure_retains_previously_loaded_products() {
        let mut state = CatalogState::new();
        state.apply_loaded(vec![product(1, "A")]);
        state.apply_failed("transport failed: connection reset".to_string());
        assert_eq!(state.status(), CatalogStatus::Failed);
        assert_eq!(state.products().len(), 1);
        assert_eq!(
            state.error(),
            Some("transport failed: connection reset")
        );
    }

    #[test]
    fn loading_does_not_touch_products() {
        let mut state = CatalogState::new();
        state.apply_loaded(vec![product(1, "A")]);
        state.begin_loading();
        assert_eq!(state.status(), CatalogStatus::Loading);
        assert_eq!(state.products().len(), 1);
    }
}
