//! Delete-confirmation dialog state
//!
//! Every list screen shares the same modal: pick a target, confirm, dispatch
//! one delete. A confirm with no target, a target marked undeletable, or an
//! outstanding delete is a guarded no-op; no partial request is ever sent.

use shared::types::EntityId;

use crate::api::ApiClient;
use crate::error::SubmitFailure;
use crate::form::SubmitOutcome;

/// The entity a delete modal is pointed at
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub id: EntityId,
    /// Name shown in the confirmation text
    pub label: String,
    /// Built-in roles set this to false; the confirm button stays inert
    pub deletable: bool,
}

impl DeleteTarget {
    pub fn new(id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            deletable: true,
        }
    }

    pub fn undeletable(id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            deletable: false,
        }
    }
}

/// State of one delete-confirmation modal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteDialog {
    target: Option<DeleteTarget>,
    in_flight: bool,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, target: DeleteTarget) {
        if self.in_flight {
            tracing::warn!("open ignored while a delete is in flight");
            return;
        }
        self.target = Some(target);
    }

    pub fn target(&self) -> Option<&DeleteTarget> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Claim the in-flight slot and return the id to delete.
    ///
    /// Returns `None` when there is no target, the target is not deletable,
    /// or a delete is already outstanding.
    pub fn begin_confirm(&mut self) -> Option<EntityId> {
        if self.in_flight {
            return None;
        }
        let target = self.target.as_ref()?;
        if !target.deletable {
            tracing::debug!(id = target.id, "delete rejected: target is not deletable");
            return None;
        }
        self.in_flight = true;
        Some(target.id)
    }

    /// Apply the collaborator's response; success closes the modal
    pub fn complete(&mut self, result: Result<(), SubmitFailure>) {
        self.in_flight = false;
        match result {
            Ok(()) => self.target = None,
            Err(failure) => {
                tracing::warn!(?failure, "delete failed");
            }
        }
    }

    /// Drive one full confirm gesture against the collaborator
    pub async fn confirm<C: ApiClient>(
        &mut self,
        client: &C,
        collection: &str,
    ) -> SubmitOutcome {
        let Some(id) = self.begin_confirm() else {
            return SubmitOutcome::NotDispatched;
        };

        let result = client.delete(collection, id).await;
        let outcome = if result.is_ok() {
            SubmitOutcome::Completed
        } else {
            SubmitOutcome::Failed
        };
        self.complete(result);
        outcome
    }

    pub fn cancel(&mut self) {
        if self.in_flight {
            tracing::warn!("cancel ignored while a delete is in flight");
            return;
        }
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_with_no_target_is_noop() {
        let mut dialog = DeleteDialog::new();
        assert_eq!(dialog.begin_confirm(), None);
        assert!(!dialog.is_in_flight());
    }

    #[test]
    fn test_confirm_undeletable_target_is_noop() {
        let mut dialog = DeleteDialog::new();
        dialog.open(DeleteTarget::undeletable(1, "admin"));
        assert_eq!(dialog.begin_confirm(), None);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_confirm_guards_reentry() {
        let mut dialog = DeleteDialog::new();
        dialog.open(DeleteTarget::new(7, "Tari Kecak"));
        assert_eq!(dialog.begin_confirm(), Some(7));
        assert_eq!(dialog.begin_confirm(), None);

        dialog.complete(Ok(()));
        assert!(!dialog.is_open());
        assert!(!dialog.is_in_flight());
    }

    #[test]
    fn test_failed_delete_keeps_modal_open() {
        let mut dialog = DeleteDialog::new();
        dialog.open(DeleteTarget::new(7, "Tari Kecak"));
        dialog.begin_confirm();
        dialog.complete(Err(SubmitFailure::Transport("timeout".to_string())));
        assert!(dialog.is_open());
        assert!(!dialog.is_in_flight());
        // Retry is a manual gesture; the slot is free again
        assert_eq!(dialog.begin_confirm(), Some(7));
    }
}
