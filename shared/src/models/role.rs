//! Role and permission grant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// A role as returned by the backend, carrying per-module grant flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    /// Built-in roles (e.g. "admin") cannot be deleted from the UI
    pub deletable: bool,
    pub grants: Vec<ModuleGrant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Boolean grant flags a role holds for one capability module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleGrant {
    /// Module name, matching an entry in the live permission catalog
    pub module: String,
    #[serde(flatten)]
    pub flags: GrantFlags,
}

/// The four conventional grant flags, in catalog slot order.
///
/// The backend names the first flag `read`; it replays onto the catalog's
/// first slot, whose identifier is `view`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrantFlags {
    pub read: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl GrantFlags {
    /// Flags in their fixed slot order: read, create, update, delete
    pub fn as_slots(&self) -> [bool; 4] {
        [self.read, self.create, self.update, self.delete]
    }

    pub fn all() -> Self {
        Self {
            read: true,
            create: true,
            update: true,
            delete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_flags_slot_order() {
        let flags = GrantFlags {
            read: true,
            create: false,
            update: true,
            delete: false,
        };
        assert_eq!(flags.as_slots(), [true, false, true, false]);
    }

    #[test]
    fn test_module_grant_flattens_flags() {
        let grant = ModuleGrant {
            module: "cultures".to_string(),
            flags: GrantFlags::all(),
        };
        let json = serde_json::to_value(&grant).unwrap();
        assert_eq!(json["module"], "cultures");
        assert_eq!(json["read"], true);
        assert_eq!(json["delete"], true);
    }

    #[test]
    fn test_module_grant_parses_backend_payload() {
        let grant: ModuleGrant = serde_json::from_str(
            r#"{"module":"cultures","read":true,"create":false,"update":true,"delete":false}"#,
        )
        .unwrap();
        assert_eq!(grant.module, "cultures");
        assert!(grant.flags.read);
        assert!(!grant.flags.create);
        assert!(grant.flags.update);
    }
}
