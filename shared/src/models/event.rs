//! Event and event category models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Status};

/// A cultural event listed on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub event_category_id: Option<EntityId>,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Ticket price in Rupiah; zero means free admission
    pub price: Decimal,
    pub quota: Option<i32>,
    pub image: Option<String>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category grouping events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
