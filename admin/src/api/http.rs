//! HTTP implementation of the collaborator contract
//!
//! JSON writes by default; when a submission carries a file upload, the
//! write is tunnelled as a multipart POST with a `_method` override part.
//! Validation failures arrive as HTTP 422 with a field-to-messages map.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use shared::types::EntityId;

use crate::config::ApiConfig;
use crate::error::{AdminError, AdminResult, FieldErrors, SubmitFailure};

use super::{ApiClient, AttachmentAction, WriteOp, WriteRequest, ATTACHMENT_FIELD};

/// Client for the BudayaKu backend API
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

/// Error body shape for validation failures
#[derive(Debug, Deserialize)]
struct ValidationBody {
    #[serde(default)]
    errors: FieldErrors,
}

impl HttpApiClient {
    /// Create a new HttpApiClient from configuration
    pub fn new(config: &ApiConfig) -> AdminResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AdminError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new HttpApiClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, collection: &str, id: Option<EntityId>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, collection, id),
            None => format!("{}/{}", self.base_url, collection),
        }
    }

    async fn send_json(&self, request: &WriteRequest) -> Result<(), SubmitFailure> {
        let mut fields = request.body.fields.clone();
        if matches!(request.body.attachment, Some(AttachmentAction::Clear)) {
            // Explicit null tells the backend to drop the stored image;
            // an absent field means "keep it".
            fields.insert(ATTACHMENT_FIELD.to_string(), Value::Null);
        }

        let builder = match request.op {
            WriteOp::Create => self.client.post(self.endpoint(request.collection, None)),
            WriteOp::Update(id) => self.client.put(self.endpoint(request.collection, Some(id))),
        };

        let response = builder
            .json(&fields)
            .send()
            .await
            .map_err(|e| SubmitFailure::Transport(format!("request failed: {}", e)))?;

        Self::check_response(response).await
    }

    async fn send_multipart(
        &self,
        request: &WriteRequest,
        file: &crate::attachment::PendingAttachment,
    ) -> Result<(), SubmitFailure> {
        let mut form = Form::new();
        for (name, value) in &request.body.fields {
            form = form.text(name.clone(), field_text(value));
        }

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| SubmitFailure::Transport(format!("invalid attachment type: {}", e)))?;
        form = form.part(ATTACHMENT_FIELD.to_string(), part);

        // Multipart updates tunnel over POST with a method-override part
        let url = match request.op {
            WriteOp::Create => self.endpoint(request.collection, None),
            WriteOp::Update(id) => {
                form = form.text("_method", "PUT");
                self.endpoint(request.collection, Some(id))
            }
        };

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitFailure::Transport(format!("request failed: {}", e)))?;

        Self::check_response(response).await
    }

    async fn check_response(response: reqwest::Response) -> Result<(), SubmitFailure> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(parse_failure(status, &body))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn execute(&self, request: &WriteRequest) -> Result<(), SubmitFailure> {
        tracing::debug!(
            collection = request.collection,
            op = ?request.op,
            "dispatching write"
        );

        match &request.body.attachment {
            Some(AttachmentAction::Upload(file)) => self.send_multipart(request, file).await,
            _ => self.send_json(request).await,
        }
    }

    async fn delete(&self, collection: &str, id: EntityId) -> Result<(), SubmitFailure> {
        tracing::debug!(collection, id, "dispatching delete");

        let response = self
            .client
            .delete(self.endpoint(collection, Some(id)))
            .send()
            .await
            .map_err(|e| SubmitFailure::Transport(format!("request failed: {}", e)))?;

        Self::check_response(response).await
    }
}

/// Map a non-success response to a submit failure
fn parse_failure(status: StatusCode, body: &str) -> SubmitFailure {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(parsed) = serde_json::from_str::<ValidationBody>(body) {
            if !parsed.errors.is_empty() {
                return SubmitFailure::Validation(parsed.errors);
            }
        }
    }
    SubmitFailure::Transport(format!("backend returned {}: {}", status, body))
}

/// Render a JSON field value as a multipart text part
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
