//! Culture and culture category models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Status};

/// A cultural-heritage entry (dance, ritual, craft, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Culture {
    pub id: EntityId,
    pub culture_category_id: Option<EntityId>,
    pub name: String,
    pub province: Option<String>,
    pub description: Option<String>,
    /// Path of the stored image on the backend, if one was uploaded
    pub image: Option<String>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category grouping culture entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultureCategory {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
