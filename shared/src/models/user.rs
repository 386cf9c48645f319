//! User account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Language, Status};

/// An administrative user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub role_id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_language: Language,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
