//! Culture dialog draft

use serde_json::{json, Map};

use shared::models::Culture;
use shared::types::{EntityId, Status};

use crate::api::SubmitBody;
use crate::attachment::AttachmentSlot;
use crate::form::FormModel;

/// Editable fields of a culture entry
#[derive(Debug, Clone, PartialEq)]
pub struct CultureDraft {
    pub name: String,
    pub category_id: Option<EntityId>,
    pub province: String,
    pub description: String,
    pub status: Status,
    pub image: AttachmentSlot,
}

/// Single-field update for a culture draft
#[derive(Debug, Clone, PartialEq)]
pub enum CultureField {
    Name(String),
    CategoryId(Option<EntityId>),
    Province(String),
    Description(String),
    Status(Status),
}

impl FormModel for CultureDraft {
    type Entity = Culture;
    type Field = CultureField;

    const COLLECTION: &'static str = "cultures";

    fn blank() -> Self {
        Self {
            name: String::new(),
            category_id: None,
            province: String::new(),
            description: String::new(),
            status: Status::Active,
            image: AttachmentSlot::unchanged(),
        }
    }

    fn from_entity(entity: &Culture) -> Self {
        Self {
            name: entity.name.clone(),
            category_id: entity.culture_category_id,
            province: entity.province.clone().unwrap_or_default(),
            description: entity.description.clone().unwrap_or_default(),
            status: entity.status,
            image: AttachmentSlot::from_stored(entity.image.as_deref()),
        }
    }

    fn entity_id(entity: &Culture) -> EntityId {
        entity.id
    }

    fn apply(&mut self, update: CultureField) {
        match update {
            CultureField::Name(value) => self.name = value,
            CultureField::CategoryId(value) => self.category_id = value,
            CultureField::Province(value) => self.province = value,
            CultureField::Description(value) => self.description = value,
            CultureField::Status(value) => self.status = value,
        }
    }

    fn body(&self) -> SubmitBody {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("culture_category_id".to_string(), json!(self.category_id));
        fields.insert("province".to_string(), json!(self.province));
        fields.insert("description".to_string(), json!(self.description));
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
