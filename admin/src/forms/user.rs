//! User dialog draft

use serde_json::{json, Map};

use shared::models::User;
use shared::types::{EntityId, Language, Status};

use crate::api::SubmitBody;
use crate::form::FormModel;

/// Editable fields of a user account
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role_id: Option<EntityId>,
    pub preferred_language: Language,
    pub status: Status,
    /// Left empty on edit to keep the current password
    pub password: String,
}

/// Single-field update for a user draft
#[derive(Debug, Clone, PartialEq)]
pub enum UserField {
    Name(String),
    Email(String),
    Phone(String),
    RoleId(Option<EntityId>),
    PreferredLanguage(Language),
    Status(Status),
    Password(String),
}

impl FormModel for UserDraft {
    type Entity = User;
    type Field = UserField;

    const COLLECTION: &'static str = "users";

    fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role_id: None,
            preferred_language: Language::Indonesian,
            status: Status::Active,
            password: String::new(),
        }
    }

    fn from_entity(entity: &User) -> Self {
        Self {
            name: entity.name.clone(),
            email: entity.email.clone(),
            phone: entity.phone.clone().unwrap_or_default(),
            role_id: entity.role_id,
            preferred_language: entity.preferred_language,
            status: entity.status,
            password: String::new(),
        }
    }

    fn entity_id(entity: &User) -> EntityId {
        entity.id
    }

    fn apply(&mut self, update: UserField) {
        match update {
            UserField::Name(value) => self.name = value,
            UserField::Email(value) => self.email = value,
            UserField::Phone(value) => self.phone = value,
            UserField::RoleId(value) => self.role_id = value,
            UserField::PreferredLanguage(value) => self.preferred_language = value,
            UserField::Status(value) => self.status = value,
            UserField::Password(value) => self.password = value,
        }
    }

    fn body(&self) -> SubmitBody {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("email".to_string(), json!(self.email));
        fields.insert("phone".to_string(), json!(self.phone));
        fields.insert("role_id".to_string(), json!(self.role_id));
        fields.insert(
            "preferred_language".to_string(),
            json!(self.preferred_language.code()),
        );
        fields.insert("status".to_string(), json!(self.status.as_str()));
        // An empty password means "keep the current one"; omit it entirely
        if !self.password.is_empty() {
            fields.insert("password".to_string(), json!(self.password));
        }
        SubmitBody {
            fields,
            attachment: None,
        }
    }
}
