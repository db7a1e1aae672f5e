//! # Mock Catalog & Testing Utilities
//!
//! [`MockCatalog`] implements [`CatalogApi`] entirely in memory against a
//! queue of scripted expectations, so controller logic can be tested
//! deterministically without a network. [`ChannelSink`] is a
//! [`NotificationSink`] that forwards every notification to a channel the
//! test can await.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_sync::mock::MockCatalog;
//! use catalog_sync::remote::CatalogApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCatalog::new();
//!     mock.expect_list().return_ok(vec![]);
//!
//!     let products = mock.list().await.unwrap();
//!     assert!(products.is_empty());
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in FIFO order across all operations. A call
//! with no matching expectation at the front of the queue panics, which
//! makes an unexpected request (e.g. a refresh that should not have been
//! issued) a test failure rather than a silent pass.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use crate::notify::{Notification, NotificationSink};
use crate::remote::{ApiError, CatalogApi};

/// One scripted remote interaction.
#[derive(Debug)]
enum Expectation {
    List(Result<Vec<Product>, ApiError>),
    Create(Result<Product, ApiError>),
    Replace {
        id: ProductId,
        response: Result<Product, ApiError>,
    },
    Patch {
        id: ProductId,
        response: Result<Product, ApiError>,
    },
    Remove {
        id: ProductId,
        response: Result<(), ApiError>,
    },
}

impl Expectation {
    fn describe(&self) -> &'static str {
        match self {
            Expectation::List(_) => "list",
            Expectation::Create(_) => "create",
            Expectation::Replace { .. } => "replace",
            Expectation::Patch { .. } => "patch",
            Expectation::Remove { .. } => "remove",
        }
    }
}

/// In-memory scripted [`CatalogApi`] implementation.
///
/// Cheap to clone; all clones share one expectation queue, so a test can
/// keep a copy for `expect_*`/`verify` while the controller holds another
/// as its API.
#[derive(Clone, Default)]
pub struct MockCatalog {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list` call.
    pub fn expect_list(&self) -> ListExpectation<'_> {
        ListExpectation { mock: self }
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> CreateExpectation<'_> {
        CreateExpectation { mock: self }
    }

    /// Expects a `replace` call for the given id.
    pub fn expect_replace(&self, id: ProductId) -> ReplaceExpectation<'_> {
        ReplaceExpectation { mock: self, id }
    }

    /// Expects a `patch` call for the given id.
    pub fn expect_patch(&self, id: ProductId) -> PatchExpectation<'_> {
        PatchExpectation { mock: self, id }
    }

    /// Expects a `remove` call for the given id.
    pub fn expect_remove(&self, id: ProductId) -> RemoveExpectation<'_> {
        RemoveExpectation { mock: self, id }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn push(&self, expectation: Expectation) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    fn pop(&self, operation: &str) -> Expectation {
        match self.expectations.lock().unwrap().pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {} call: no expectations remaining", operation),
        }
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        match self.pop("list") {
            Expectation::List(response) => response,
            other => panic!("Unexpected list call, expected {}", other.describe()),
        }
    }

    async fn create(&self, _draft: &ProductDraft) -> Result<Product, ApiError> {
        match self.pop("create") {
            Expectation::Create(response) => response,
            other => panic!("Unexpected create call, expected {}", other.describe()),
        }
    }

    async fn replace(&self, id: ProductId, _draft: &ProductDraft) -> Result<Product, ApiError> {
        match self.pop("replace") {
            Expectation::Replace { id: expected, response } => {
                assert_eq!(id, expected, "replace called with wrong id");
                response
            }
            other => panic!("Unexpected replace call, expected {}", other.describe()),
        }
    }

    async fn patch(&self, id: ProductId, _patch: &ProductPatch) -> Result<Product, ApiError> {
        match self.pop("patch") {
            Expectation::Patch { id: expected, response } => {
                assert_eq!(id, expected, "patch called with wrong id");
                response
            }
            other => panic!("Unexpected patch call, expected {}", other.describe()),
        }
    }

    async fn remove(&self, id: ProductId) -> Result<(), ApiError> {
        match self.pop("remove") {
            Expectation::Remove { id: expected, response } => {
                assert_eq!(id, expected, "remove called with wrong id");
                response
            }
            other => panic!("Unexpected remove call, expected {}", other.describe()),
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectation<'a> {
    mock: &'a MockCatalog,
}

impl ListExpectation<'_> {
    pub fn return_ok(self, products: Vec<Product>) {
        self.mock.push(Expectation::List(Ok(products)));
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(Expectation::List(Err(error)));
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<'a> {
    mock: &'a MockCatalog,
}

impl CreateExpectation<'_> {
    pub fn return_ok(self, product: Product) {
        self.mock.push(Expectation::Create(Ok(product)));
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(Expectation::Create(Err(error)));
    }
}

/// Builder for `replace` expectations.
pub struct ReplaceExpectation<'a> {
    mock: &'a MockCatalog,
    id: ProductId,
}

impl ReplaceExpectation<'_> {
    pub fn return_ok(self, product: Product) {
        self.mock.push(Expectation::Replace {
            id: self.id,
            response: Ok(product),
        });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(Expectation::Replace {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `patch` expectations.
pub struct PatchExpectation<'a> {
    mock: &'a MockCatalog,
    id: ProductId,
}

impl PatchExpectation<'_> {
    pub fn return_ok(self, product: Product) {
        self.mock.push(Expectation::Patch {
            id: self.id,
            response: Ok(product),
        });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(Expectation::Patch {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `remove` expectations.
pub struct RemoveExpectation<'a> {
    mock: &'a MockCatalog,
    id: ProductId,
}

impl RemoveExpectation<'_> {
    pub fn return_ok(self) {
        self.mock.push(Expectation::Remove {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(Expectation::Remove {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Sink that forwards every notification to an unbounded channel.
///
/// Lets tests await mutation outcomes instead of polling. The controller
/// posts each refresh *before* notifying, so a snapshot requested after a
/// notification arrives here observes the refreshed replica.
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) {
        // Receiver may be gone if the test finished early; nothing to do.
        let _ = self.sender.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: "A".to_string(),
            price: 10.0,
            description: "d".to_string(),
            image: "u".to_string(),
            category: "c".to_string(),
        }
    }

    #[tokio::test]
    async fn expectations_are_consumed_in_order() {
        let mock = MockCatalog::new();
        mock.expect_list().return_ok(vec![product(1)]);
        mock.expect_remove(ProductId(1)).return_ok();

        assert_eq!(mock.list().await.unwrap().len(), 1);
        mock.remove(ProductId(1)).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn scripted_errors_are_returned() {
        let mock = MockCatalog::new();
        mock.expect_create()
            .return_err(ApiError::Transport("connection refused".to_string()));

        let draft = ProductDraft {
            title: "t".to_string(),
            price: 1.0,
            description: "d".to_string(),
            image: "u".to_string(),
            category: "c".to_string(),
        };
        let err = mock.create(&draft).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "no expectations remaining")]
    async fn unexpected_call_panics() {
        let mock = MockCatalog::new();
        let _ = mock.list().await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn unmet_expectation_fails_verify() {
        let mock = MockCatalog::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
