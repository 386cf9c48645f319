//! BudayaKu Admin Core
//!
//! Reusable state logic behind the admin dialogs of the BudayaKu
//! cultural-heritage and event-management application: form-state
//! reconciliation for the create/edit dialogs, the role permission matrix,
//! delete confirmation, and the language preference flag. Dispatch and
//! persistence are delegated to the backend API through [`api::ApiClient`].

pub mod api;
pub mod attachment;
pub mod config;
pub mod delete;
pub mod error;
pub mod form;
pub mod forms;
pub mod prefs;

pub use shared::permissions;

pub use config::AdminConfig;
pub use error::{AdminError, AdminResult};
