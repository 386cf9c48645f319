//! Event dialog draft

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Map};

use shared::models::Event;
use shared::types::{EntityId, Status};

use crate::api::SubmitBody;
use crate::attachment::AttachmentSlot;
use crate::form::FormModel;

/// Editable fields of an event
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub category_id: Option<EntityId>,
    pub location: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Decimal,
    pub quota: Option<i32>,
    pub status: Status,
    pub image: AttachmentSlot,
}

/// Single-field update for an event draft
#[derive(Debug, Clone, PartialEq)]
pub enum EventField {
    Name(String),
    CategoryId(Option<EntityId>),
    Location(String),
    Description(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Price(Decimal),
    Quota(Option<i32>),
    Status(Status),
}

impl FormModel for EventDraft {
    type Entity = Event;
    type Field = EventField;

    const COLLECTION: &'static str = "events";

    fn blank() -> Self {
        Self {
            name: String::new(),
            category_id: None,
            location: String::new(),
            description: String::new(),
            start_date: None,
            end_date: None,
            price: Decimal::ZERO,
            quota: None,
            status: Status::Active,
            image: AttachmentSlot::unchanged(),
        }
    }

    fn from_entity(entity: &Event) -> Self {
        Self {
            name: entity.name.clone(),
            category_id: entity.event_category_id,
            location: entity.location.clone().unwrap_or_default(),
            description: entity.description.clone().unwrap_or_default(),
            start_date: entity.start_date,
            end_date: entity.end_date,
            price: entity.price,
            quota: entity.quota,
            status: entity.status,
            image: AttachmentSlot::from_stored(entity.image.as_deref()),
        }
    }

    fn entity_id(entity: &Event) -> EntityId {
        entity.id
    }

    fn apply(&mut self, update: EventField) {
        match update {
            EventField::Name(value) => self.name = value,
            EventField::CategoryId(value) => self.category_id = value,
            EventField::Location(value) => self.location = value,
            EventField::Description(value) => self.description = value,
            EventField::StartDate(value) => self.start_date = value,
            EventField::EndDate(value) => self.end_date = value,
            EventField::Price(value) => self.price = value,
            EventField::Quota(value) => self.quota = value,
            EventField::Status(value) => self.status = value,
        }
    }

    fn body(&self) -> SubmitBody {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("event_category_id".to_string(), json!(self.category_id));
        fields.insert("location".to_string(), json!(self.location));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert("start_date".to_string(), json!(self.start_date));
        fields.insert("end_date".to_string(), json!(self.end_date));
        fields.insert("price".to_string(), json!(self.price));
        fields.insert("quota".to_string(), json!(self.quota));
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
