//! Form-state reconciliation for the create/edit dialogs
//!
//! Each dialog owns one [`FormController`], which keeps a local draft
//! synchronized with an optional edit target and performs the
//! create-or-update decision at submit time. The controller is pure state
//! transition logic: `begin_submit` hands the presentation layer a
//! [`WriteRequest`] to dispatch, and `complete_submit` applies the outcome.
//! The async [`FormController::submit`] drives both ends over an
//! [`ApiClient`].

use crate::api::{ApiClient, SubmitBody, WriteOp, WriteRequest};
use crate::attachment::{AttachmentSlot, PendingAttachment};
use crate::error::{FieldErrors, SubmitFailure};

use shared::types::EntityId;

/// Create-or-edit mode, fixed for the lifetime of one dialog session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Edit(EntityId),
}

/// Outcome of driving one submit gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The write succeeded; the dialog closed and the draft was reset
    Completed,
    /// The write failed; the draft and any field errors are retained
    Failed,
    /// Nothing was dispatched (a submit was already in flight)
    NotDispatched,
}

/// An editable draft bound to one entity type
pub trait FormModel: Clone + PartialEq + std::fmt::Debug {
    /// The persisted entity this draft edits
    type Entity;
    /// Tagged union of single-field updates
    type Field;

    /// Collection endpoint this draft submits to
    const COLLECTION: &'static str;

    /// Draft with every field at its documented default
    fn blank() -> Self;

    /// Draft populated verbatim from an edit target, with derived fields
    /// recomputed from the target's raw representation
    fn from_entity(entity: &Self::Entity) -> Self;

    fn entity_id(entity: &Self::Entity) -> EntityId;

    /// Replace one field in the draft
    fn apply(&mut self, update: Self::Field);

    /// Serialize the draft for dispatch
    fn body(&self) -> SubmitBody;

    /// The draft's attachment slot, for image-bearing entities
    fn attachment(&mut self) -> Option<&mut AttachmentSlot> {
        None
    }
}

/// Owns one draft per dialog instance
#[derive(Debug, Clone, PartialEq)]
pub struct FormController<M: FormModel> {
    mode: Mode,
    draft: M,
    errors: FieldErrors,
    transport_error: Option<String>,
    in_flight: bool,
    open: bool,
}

impl<M: FormModel> Default for FormController<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FormModel> FormController<M> {
    pub fn new() -> Self {
        Self {
            mode: Mode::Create,
            draft: M::blank(),
            errors: FieldErrors::new(),
            transport_error: None,
            in_flight: false,
            open: false,
        }
    }

    /// Open the dialog, replacing the draft wholly.
    ///
    /// With a target the dialog edits it; without one it creates. Nothing
    /// from a previous target survives, and calling this twice with the
    /// same target produces the same draft.
    pub fn initialize(&mut self, target: Option<&M::Entity>) {
        if self.in_flight {
            tracing::warn!("initialize ignored while a submit is in flight");
            return;
        }

        match target {
            Some(entity) => {
                self.mode = Mode::Edit(M::entity_id(entity));
                self.draft = M::from_entity(entity);
            }
            None => {
                self.mode = Mode::Create;
                self.draft = M::blank();
            }
        }
        self.errors.clear();
        self.transport_error = None;
        self.open = true;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &M {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// All field errors from the last failed submit
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Messages attached to one field, empty if none
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Generic failure message when the last submit failed without field
    /// attribution
    pub fn transport_error(&self) -> Option<&str> {
        self.transport_error.as_deref()
    }

    /// Replace one field in the draft. Rejected while a submit is in
    /// flight, so an outstanding write never races a partially-edited value.
    pub fn set(&mut self, update: M::Field) -> bool {
        if self.in_flight {
            return false;
        }
        self.draft.apply(update);
        true
    }

    /// Store a picked file and derive its local preview
    pub fn set_attachment(&mut self, file: PendingAttachment) -> bool {
        if self.in_flight {
            return false;
        }
        match self.draft.attachment() {
            Some(slot) => {
                slot.replace(file);
                true
            }
            None => false,
        }
    }

    /// Remove the attachment, explicitly signaling "no image"
    pub fn clear_attachment(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        match self.draft.attachment() {
            Some(slot) => {
                slot.clear();
                true
            }
            None => false,
        }
    }

    /// Serialize the draft and claim the in-flight slot.
    ///
    /// Returns the write to dispatch, or `None` when a submit is already
    /// outstanding. Exactly one write is produced per accepted call:
    /// a create addressed to the collection, or an update addressed to the
    /// edit target's id.
    pub fn begin_submit(&mut self) -> Option<WriteRequest> {
        if self.in_flight {
            tracing::debug!(collection = M::COLLECTION, "submit rejected: already in flight");
            return None;
        }

        let op = match self.mode {
            Mode::Create => WriteOp::Create,
            Mode::Edit(id) => WriteOp::Update(id),
        };

        self.in_flight = true;
        self.transport_error = None;
        Some(WriteRequest {
            collection: M::COLLECTION,
            op,
            body: self.draft.body(),
        })
    }

    /// Apply the collaborator's response to the outstanding submit.
    ///
    /// The in-flight flag clears unconditionally. Success closes the dialog
    /// and resets the draft to its create defaults so a stale draft is never
    /// shown on reopen. Failure retains the draft untouched; validation
    /// messages are attached by field name for display.
    pub fn complete_submit(&mut self, result: Result<(), SubmitFailure>) {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.mode = Mode::Create;
                self.draft = M::blank();
                self.errors.clear();
                self.transport_error = None;
                self.open = false;
            }
            Err(SubmitFailure::Validation(errors)) => {
                self.errors = errors;
            }
            Err(SubmitFailure::Transport(message)) => {
                tracing::warn!(collection = M::COLLECTION, %message, "submit transport failure");
                self.transport_error = Some(message);
            }
        }
    }

    /// Drive one full submit gesture against the collaborator
    pub async fn submit<C: ApiClient>(&mut self, client: &C) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::NotDispatched;
        };

        let result = client.execute(&request).await;
        let outcome = if result.is_ok() {
            SubmitOutcome::Completed
        } else {
            SubmitOutcome::Failed
        };
        self.complete_submit(result);
        outcome
    }

    /// Discard the draft unconditionally and close the dialog.
    ///
    /// Disabled while a submit is in flight, matching the dialog's disabled
    /// close control during that window.
    pub fn cancel(&mut self) {
        if self.in_flight {
            tracing::warn!("cancel ignored while a submit is in flight");
            return;
        }
        self.mode = Mode::Create;
        self.draft = M::blank();
        self.errors.clear();
        self.transport_error = None;
        self.open = false;
    }
}
