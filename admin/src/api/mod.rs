//! The external collaborator seam
//!
//! Every dialog submits through an [`ApiClient`]; the core never talks to
//! the network directly. [`HttpApiClient`] is the production implementation;
//! tests substitute their own.

mod http;

pub use http::HttpApiClient;

use async_trait::async_trait;
use serde_json::{Map, Value};

use shared::types::EntityId;

use crate::attachment::PendingAttachment;
use crate::error::SubmitFailure;

/// Name of the file field carried by image-bearing entities
pub const ATTACHMENT_FIELD: &str = "image";

/// Which write a submission dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// POST to the collection endpoint
    Create,
    /// PUT addressed to `{collection}/{id}`
    Update(EntityId),
}

/// Attachment change riding along with a submission
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentAction {
    /// Remove the stored image (encoded as an explicit null on the wire)
    Clear,
    /// Upload a replacement file (forces multipart encoding)
    Upload(PendingAttachment),
}

/// Serialized draft, ready for dispatch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmitBody {
    pub fields: Map<String, Value>,
    pub attachment: Option<AttachmentAction>,
}

/// One write addressed to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRequest {
    pub collection: &'static str,
    pub op: WriteOp,
    pub body: SubmitBody,
}

/// CRUD backend the dialogs submit to
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Dispatch a create or update write
    async fn execute(&self, request: &WriteRequest) -> Result<(), SubmitFailure>;

    /// Delete one entity; takes no body
    async fn delete(&self, collection: &str, id: EntityId) -> Result<(), SubmitFailure>;
}
