//! Errors for handle-to-controller communication.

use thiserror::Error;

/// Failures crossing the channel between a [`CatalogHandle`](super::CatalogHandle)
/// and its controller. Distinct from [`ApiError`](crate::remote::ApiError):
/// these mean the controller itself is gone, not that the network failed.
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("catalog controller closed")]
    ControllerClosed,
    #[error("catalog controller dropped the response channel")]
    ControllerDropped,
}
