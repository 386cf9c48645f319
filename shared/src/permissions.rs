//! Permission matrix for the role editor
//!
//! A role's grants are edited as a grid: one row per capability module, one
//! checkbox per permission, plus an "all" checkbox that grants or revokes a
//! whole row at once. The reducer owns only the granted set; the module
//! catalog is supplied externally and never mutated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::ModuleGrant;

/// Number of permission slots a module row exposes in the matrix.
///
/// Rows are conventionally {view, create, update, delete} in that order.
/// Identifiers beyond this cap are never shown and never toggled by the
/// row-level gesture.
pub const MATRIX_SLOTS: usize = 4;

/// A named capability group owning an ordered list of permission ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionModule {
    pub name: String,
    pub permission_ids: Vec<String>,
}

impl PermissionModule {
    /// Module with the conventional view/create/update/delete identifiers
    pub fn crud(name: &str) -> Self {
        Self {
            name: name.to_string(),
            permission_ids: vec![
                format!("{}.view", name),
                format!("{}.create", name),
                format!("{}.update", name),
                format!("{}.delete", name),
            ],
        }
    }

    /// The identifiers that participate in matrix display and row toggles
    pub fn matrix_ids(&self) -> &[String] {
        let cap = self.permission_ids.len().min(MATRIX_SLOTS);
        &self.permission_ids[..cap]
    }
}

/// Default catalog covering the eight admin sections
pub fn default_catalog() -> Vec<PermissionModule> {
    [
        "cultures",
        "culture-categories",
        "events",
        "event-categories",
        "store-products",
        "store-categories",
        "users",
        "roles",
    ]
    .iter()
    .map(|name| PermissionModule::crud(name))
    .collect()
}

/// The set of permission ids a role draft currently grants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionMatrix {
    granted: HashSet<String>,
}

impl PermissionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matrix pre-populated with a set of granted ids
    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            granted: ids.into_iter().collect(),
        }
    }

    /// Rebuild the granted set from a role's per-module boolean flags.
    ///
    /// Each flag is replayed against the catalog module's identifier list in
    /// slot order. Grants for modules absent from the live catalog are
    /// dropped; the catalog is owned by the backend, so this is reported but
    /// not fatal.
    pub fn from_grants(grants: &[ModuleGrant], catalog: &[PermissionModule]) -> Self {
        let mut granted = HashSet::new();
        for grant in grants {
            let Some(module) = catalog.iter().find(|m| m.name == grant.module) else {
                tracing::warn!(module = %grant.module, "role grant references unknown module");
                continue;
            };
            for (flag, id) in grant.flags.as_slots().iter().zip(module.matrix_ids()) {
                if *flag {
                    granted.insert(id.clone());
                }
            }
        }
        Self { granted }
    }

    pub fn is_granted(&self, id: &str) -> bool {
        self.granted.contains(id)
    }

    pub fn granted(&self) -> &HashSet<String> {
        &self.granted
    }

    /// Granted ids in stable order, for serialization
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.granted.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Toggle a single permission in or out of the granted set
    pub fn toggle_permission(&mut self, id: &str) {
        if !self.granted.remove(id) {
            self.granted.insert(id.to_string());
        }
    }

    /// Toggle a whole module row atomically.
    ///
    /// If every id is already granted the row is fully revoked; otherwise
    /// the row is fully granted. A partially granted row therefore always
    /// resolves to fully granted, never to fully revoked.
    pub fn toggle_module(&mut self, ids: &[String]) {
        let cap = ids.len().min(MATRIX_SLOTS);
        let ids = &ids[..cap];

        let all_granted = ids.iter().all(|id| self.granted.contains(id));
        if all_granted {
            for id in ids {
                self.granted.remove(id);
            }
        } else {
            for id in ids {
                self.granted.insert(id.clone());
            }
        }
    }

    /// Whether a module's "all" checkbox renders checked
    pub fn module_fully_granted(&self, module: &PermissionModule) -> bool {
        module
            .matrix_ids()
            .iter()
            .all(|id| self.granted.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GrantFlags;

    fn ids(module: &PermissionModule) -> Vec<String> {
        module.matrix_ids().to_vec()
    }

    #[test]
    fn test_reconstruction_round_trip() {
        let catalog = vec![PermissionModule::crud("cultures")];
        let grants = vec![ModuleGrant {
            module: "cultures".to_string(),
            flags: GrantFlags {
                read: true,
                create: false,
                update: true,
                delete: false,
            },
        }];

        let matrix = PermissionMatrix::from_grants(&grants, &catalog);
        assert_eq!(
            matrix.sorted_ids(),
            vec!["cultures.update".to_string(), "cultures.view".to_string()]
        );
    }

    #[test]
    fn test_reconstruction_drops_unknown_module() {
        let catalog = vec![PermissionModule::crud("events")];
        let grants = vec![ModuleGrant {
            module: "legacy-reports".to_string(),
            flags: GrantFlags::all(),
        }];

        let matrix = PermissionMatrix::from_grants(&grants, &catalog);
        assert!(matrix.granted().is_empty());
    }

    #[test]
    fn test_reconstruction_with_short_module() {
        // A module exposing fewer than four identifiers: extra flags are inert
        let catalog = vec![PermissionModule {
            name: "reports".to_string(),
            permission_ids: vec!["reports.view".to_string(), "reports.create".to_string()],
        }];
        let grants = vec![ModuleGrant {
            module: "reports".to_string(),
            flags: GrantFlags::all(),
        }];

        let matrix = PermissionMatrix::from_grants(&grants, &catalog);
        assert_eq!(
            matrix.sorted_ids(),
            vec!["reports.create".to_string(), "reports.view".to_string()]
        );
    }

    #[test]
    fn test_toggle_permission_symmetry() {
        let mut matrix = PermissionMatrix::new();
        matrix.toggle_permission("events.view");
        assert!(matrix.is_granted("events.view"));
        matrix.toggle_permission("events.view");
        assert!(!matrix.is_granted("events.view"));
    }

    #[test]
    fn test_toggle_module_resolves_partial_to_full_grant() {
        let module = PermissionModule::crud("events");
        let mut matrix = PermissionMatrix::new();
        matrix.toggle_permission("events.view");
        assert!(!matrix.module_fully_granted(&module));

        matrix.toggle_module(&ids(&module));
        assert!(matrix.module_fully_granted(&module));

        matrix.toggle_module(&ids(&module));
        assert!(matrix.granted().is_empty());
    }

    #[test]
    fn test_toggle_module_ignores_ids_beyond_cap() {
        let mut extended = PermissionModule::crud("events");
        extended
            .permission_ids
            .push("events.export".to_string());

        let mut matrix = PermissionMatrix::new();
        matrix.toggle_module(&extended.permission_ids);
        assert!(matrix.module_fully_granted(&extended));
        assert!(!matrix.is_granted("events.export"));
    }

    #[test]
    fn test_default_catalog_covers_admin_sections() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().any(|m| m.name == "roles"));
        assert!(catalog
            .iter()
            .all(|m| m.permission_ids.len() == MATRIX_SLOTS));
    }
}
