//! Error handling for the BudayaKu admin core
//!
//! Expected failures (validation, transport) are surfaced as data for the
//! presentation layer to render; they never propagate as panics.

use std::collections::HashMap;

use thiserror::Error;

/// Validation messages from the backend, keyed by field name
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Application error types
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Failure outcome of a dispatched write
///
/// Both variants are recoverable: the draft is retained and the user can
/// correct and resubmit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// Per-field validation messages, attached verbatim to the form
    Validation(FieldErrors),
    /// Network or non-validation HTTP failure; no field attribution
    Transport(String),
}

/// Result type alias for the admin core
pub type AdminResult<T> = Result<T, AdminError>;
