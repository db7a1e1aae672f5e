//! # Notification Surface
//!
//! Mutation outcomes are reported to the user through a [`NotificationSink`]
//! rather than through the catalog state. The sink is an external
//! collaborator: the controller calls it exactly once per mutation attempt
//! and never reads anything back.

use std::fmt::Display;

use tracing::{info, warn};

use crate::model::ProductId;

/// Which mutation a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Replace,
    Patch,
    Remove,
}

impl Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MutationKind::Create => "create",
            MutationKind::Replace => "replace",
            MutationKind::Patch => "patch",
            MutationKind::Remove => "remove",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of a single mutation attempt.
///
/// Success carries the affected product id (server-assigned for creates);
/// failure carries a human-readable description of what went wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: MutationKind,
    pub outcome: Result<ProductId, String>,
}

impl Notification {
    pub fn success(kind: MutationKind, id: ProductId) -> Self {
        Self {
            kind,
            outcome: Ok(id),
        }
    }

    pub fn failure(kind: MutationKind, error: String) -> Self {
        Self {
            kind,
            outcome: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Receives mutation outcomes for user display.
///
/// Implementations must tolerate being called from any task; the controller
/// notifies from the spawned mutation tasks, not from its event loop.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: surfaces outcomes as structured log events.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match &notification.outcome {
            Ok(id) => info!(kind = %notification.kind, %id, "Mutation succeeded"),
            Err(error) => warn!(kind = %notification.kind, %error, "Mutation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_affected_id() {
        let note = Notification::success(MutationKind::Create, ProductId(21));
        assert!(note.is_success());
        assert_eq!(note.outcome, Ok(ProductId(21)));
    }

    #[test]
    fn failure_carries_description() {
        let note = Notification::failure(MutationKind::Remove, "request failed: 404 Not Found".to_string());
        assert!(!note.is_success());
        assert_eq!(note.kind, MutationKind::Remove);
    }

    #[test]
    fn kinds_have_stable_labels() {
        assert_eq!(MutationKind::Create.to_string(), "create");
        assert_eq!(MutationKind::Patch.to_string(), "patch");
    }
}
