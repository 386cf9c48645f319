//! Role dialog draft, embedding the permission matrix

use serde_json::{json, Map};

use shared::models::Role;
use shared::types::EntityId;

use crate::api::SubmitBody;
use crate::form::FormModel;
use crate::permissions::{default_catalog, PermissionMatrix};

/// Editable fields of a role
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDraft {
    pub name: String,
    pub matrix: PermissionMatrix,
}

/// Single-field update for a role draft
#[derive(Debug, Clone, PartialEq)]
pub enum RoleField {
    Name(String),
    /// Toggle one permission checkbox
    TogglePermission(String),
    /// Toggle a whole module row
    ToggleModule(Vec<String>),
}

impl FormModel for RoleDraft {
    type Entity = Role;
    type Field = RoleField;

    const COLLECTION: &'static str = "roles";

    fn blank() -> Self {
        Self {
            name: String::new(),
            matrix: PermissionMatrix::new(),
        }
    }

    fn from_entity(entity: &Role) -> Self {
        Self {
            name: entity.name.clone(),
            matrix: PermissionMatrix::from_grants(&entity.grants, &default_catalog()),
        }
    }

    fn entity_id(entity: &Role) -> EntityId {
        entity.id
    }

    fn apply(&mut self, update: RoleField) {
        match update {
            RoleField::Name(value) => self.name = value,
            RoleField::TogglePermission(id) => self.matrix.toggle_permission(&id),
            RoleField::ToggleModule(ids) => self.matrix.toggle_module(&ids),
        }
    }

    fn body(&self) -> SubmitBody {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("permissions".to_string(), json!(self.matrix.sorted_ids()));
        SubmitBody {
            fields,
            attachment: None,
        }
    }
}
