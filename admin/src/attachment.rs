//! Three-state attachment slot for image-bearing drafts
//!
//! A submit must distinguish "keep the stored image", "remove it", and
//! "replace it with this file"; a single nullable slot cannot. The slot also
//! carries the preview the dialog renders: either the stored path of the
//! edit target or a local data URL for a freshly picked file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use uuid::Uuid;

use crate::api::AttachmentAction;

/// A file picked by the user, not yet uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAttachment {
    /// Local handle identifying this pick in the UI
    pub id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PendingAttachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Data URL for local preview, without any server round trip
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }
}

/// What happened to the attachment since the dialog opened
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttachmentState {
    /// Untouched; the backend keeps whatever it has stored
    #[default]
    Unchanged,
    /// The user removed the image; the backend must clear it
    Cleared,
    /// The user picked a replacement file
    Replaced(PendingAttachment),
}

/// What the dialog shows in the image area
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentPreview {
    /// Path of the image already stored on the backend
    Stored(String),
    /// Data URL of a locally picked file
    Local(String),
}

/// Attachment state plus its derived preview
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttachmentSlot {
    pub state: AttachmentState,
    pub preview: Option<AttachmentPreview>,
}

impl AttachmentSlot {
    /// Fresh slot for a create draft
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Slot for an edit target, previewing its stored image if any
    pub fn from_stored(path: Option<&str>) -> Self {
        Self {
            state: AttachmentState::Unchanged,
            preview: path.map(|p| AttachmentPreview::Stored(p.to_string())),
        }
    }

    pub fn replace(&mut self, file: PendingAttachment) {
        self.preview = Some(AttachmentPreview::Local(file.preview_data_url()));
        self.state = AttachmentState::Replaced(file);
    }

    /// Explicitly signal "no image", as opposed to "keep the stored one"
    pub fn clear(&mut self) {
        self.state = AttachmentState::Cleared;
        self.preview = None;
    }

    /// Wire action riding along with the next submit, if any
    pub fn action(&self) -> Option<AttachmentAction> {
        match &self.state {
            AttachmentState::Unchanged => None,
            AttachmentState::Cleared => Some(AttachmentAction::Clear),
            AttachmentState::Replaced(file) => Some(AttachmentAction::Upload(file.clone())),
        }
    }
}
