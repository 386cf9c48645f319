//! Store product dialog draft

use rust_decimal::Decimal;
use serde_json::{json, Map};

use shared::models::StoreProduct;
use shared::types::{EntityId, Status};

use crate::api::SubmitBody;
use crate::attachment::AttachmentSlot;
use crate::form::FormModel;

/// Editable fields of a store product
#[derive(Debug, Clone, PartialEq)]
pub struct StoreProductDraft {
    pub name: String,
    pub category_id: Option<EntityId>,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub status: Status,
    pub image: AttachmentSlot,
}

/// Single-field update for a store product draft
#[derive(Debug, Clone, PartialEq)]
pub enum StoreProductField {
    Name(String),
    CategoryId(Option<EntityId>),
    Description(String),
    Price(Decimal),
    Stock(i32),
    Status(Status),
}

impl FormModel for StoreProductDraft {
    type Entity = StoreProduct;
    type Field = StoreProductField;

    const COLLECTION: &'static str = "store-products";

    fn blank() -> Self {
        Self {
            name: String::new(),
            category_id: None,
            description: String::new(),
            price: Decimal::ZERO,
            stock: 0,
            status: Status::Active,
            image: AttachmentSlot::unchanged(),
        }
    }

    fn from_entity(entity: &StoreProduct) -> Self {
        Self {
            name: entity.name.clone(),
            category_id: entity.store_category_id,
            description: entity.description.clone().unwrap_or_default(),
            price: entity.price,
            stock: entity.stock,
            status: entity.status,
            image: AttachmentSlot::from_stored(entity.image.as_deref()),
        }
    }

    fn entity_id(entity: &StoreProduct) -> EntityId {
        entity.id
    }

    fn apply(&mut self, update: StoreProductField) {
        match update {
            StoreProductField::Name(value) => self.name = value,
            StoreProductField::CategoryId(value) => self.category_id = value,
            StoreProductField::Description(value) => self.description = value,
            StoreProductField::Price(value) => self.price = value,
            StoreProductField::Stock(value) => self.stock = value,
            StoreProductField::Status(value) => self.status = value,
        }
    }

    fn body(&self) -> SubmitBody {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("store_category_id".to_string(), json!(self.category_id));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert("price".to_string(), json!(self.price));
        fields.insert("stock".to_string(), json!(self.stock));
        fields.insert("status".to_string(), json!(self.status.as_str()));
        SubmitBody {
            fields,
            attachment: self.image.action(),
        }
    }

    fn attachment(&mut self) -> Option<&mut AttachmentSlot> {
        Some(&mut self.image)
    }
}
