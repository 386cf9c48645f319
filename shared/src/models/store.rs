//! Store product and store category models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Status};

/// A product sold in the souvenir store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProduct {
    pub id: EntityId,
    pub store_category_id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in Rupiah
    pub price: Decimal,
    pub stock: i32,
    pub image: Option<String>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category grouping store products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCategory {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
