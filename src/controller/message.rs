//! Messages between the handle and the controller loop.

use tokio::sync::oneshot;

use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use crate::notify::MutationKind;
use crate::remote::ApiError;

use super::state::CatalogState;

/// A write against the remote collection, as requested by the View.
#[derive(Debug, Clone)]
pub enum MutationOp {
    Create { draft: ProductDraft },
    Replace { id: ProductId, draft: ProductDraft },
    Patch { id: ProductId, patch: ProductPatch },
    Remove { id: ProductId },
}

impl MutationOp {
    pub fn kind(&self) -> MutationKind {
        match self {
            MutationOp::Create { .. } => MutationKind::Create,
            MutationOp::Replace { .. } => MutationKind::Replace,
            MutationOp::Patch { .. } => MutationKind::Patch,
            MutationOp::Remove { .. } => MutationKind::Remove,
        }
    }
}

/// Requests processed by the controller's event loop.
///
/// `ApplyRefresh` is internal: the loop's own spawned tasks post completed
/// `list()` results back through it, which is what serializes every state
/// mutation onto the loop.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Read the current state.
    Snapshot {
        respond_to: oneshot::Sender<CatalogState>,
    },
    /// Dispatch a mutation as an independent task.
    Mutate { op: MutationOp },
    /// A `list()` round trip finished; fold the result into the state.
    ApplyRefresh {
        outcome: Result<Vec<Product>, ApiError>,
        initial: bool,
    },
}
