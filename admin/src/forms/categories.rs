//! Category dialog drafts
//!
//! The three category dialogs share the same two-field shape but submit to
//! different collections, so each gets its own draft type.

use serde_json::{json, Map};

use shared::models::{CultureCategory, EventCategory, StoreCategory};
use shared::types::EntityId;

use crate::api::SubmitBody;
use crate::form::FormModel;

/// Single-field update shared by the category drafts
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryField {
    Name(String),
    Description(String),
}

macro_rules! category_draft {
    ($draft:ident, $entity:ty, $collection:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $draft {
            pub name: String,
            pub description: String,
        }

        impl FormModel for $draft {
            type Entity = $entity;
            type Field = CategoryField;

            const COLLECTION: &'static str = $collection;

            fn blank() -> Self {
                Self {
                    name: String::new(),
                    description: String::new(),
                }
            }

            fn from_entity(entity: &Self::Entity) -> Self {
                Self {
                    name: entity.name.clone(),
                    description: entity.description.clone().unwrap_or_default(),
                }
            }

            fn entity_id(entity: &Self::Entity) -> EntityId {
                entity.id
            }

            fn apply(&mut self, update: CategoryField) {
                match update {
                    CategoryField::Name(value) => self.name = value,
                    CategoryField::Description(value) => self.description = value,
                }
            }

            fn body(&self) -> SubmitBody {
                let mut fields = Map::new();
                fields.insert("name".to_string(), json!(self.name));
                fields.insert("description".to_string(), json!(self.description));
                SubmitBody {
                    fields,
                    attachment: None,
                }
            }
        }
    };
}

category_draft!(
    CultureCategoryDraft,
    CultureCategory,
    "culture-categories",
    "Editable fields of a culture category"
);
category_draft!(
    EventCategoryDraft,
    EventCategory,
    "event-categories",
    "Editable fields of an event category"
);
category_draft!(
    StoreCategoryDraft,
    StoreCategory,
    "store-categories",
    "Editable fields of a store category"
);
