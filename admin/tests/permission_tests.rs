//! Permission matrix tests
//!
//! Covers the reducer contract:
//! - Toggle symmetry for single permissions
//! - Module toggle convergence (all-or-nothing resolution, then complement)
//! - Reconstruction of the granted set from per-module boolean flags

use proptest::prelude::*;

use budayaku_admin::forms::{RoleDraft, RoleField};
use budayaku_admin::form::FormModel;
use budayaku_admin::permissions::{default_catalog, PermissionMatrix, PermissionModule};
use shared::models::{GrantFlags, ModuleGrant};

fn module_ids(module: &PermissionModule) -> Vec<String> {
    module.matrix_ids().to_vec()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_reconstruction_from_role_grants() {
    let role_grants = vec![
        ModuleGrant {
            module: "cultures".to_string(),
            flags: GrantFlags {
                read: true,
                create: false,
                update: true,
                delete: false,
            },
        },
        ModuleGrant {
            module: "events".to_string(),
            flags: GrantFlags::all(),
        },
    ];

    let matrix = PermissionMatrix::from_grants(&role_grants, &default_catalog());

    assert!(matrix.is_granted("cultures.view"));
    assert!(matrix.is_granted("cultures.update"));
    assert!(!matrix.is_granted("cultures.create"));
    assert!(!matrix.is_granted("cultures.delete"));
    assert_eq!(matrix.granted().len(), 6);
}

#[test]
fn test_role_field_updates_drive_the_matrix() {
    let mut draft = RoleDraft::blank();
    let events = PermissionModule::crud("events");

    draft.apply(RoleField::Name("Editor".to_string()));
    draft.apply(RoleField::TogglePermission("cultures.view".to_string()));
    draft.apply(RoleField::ToggleModule(module_ids(&events)));

    assert_eq!(draft.name, "Editor");
    assert!(draft.matrix.is_granted("cultures.view"));
    assert!(draft.matrix.module_fully_granted(&events));

    let body = draft.body();
    let permissions = body.fields["permissions"].as_array().unwrap();
    assert_eq!(permissions.len(), 5);
}

#[test]
fn test_toggle_module_does_not_touch_other_modules() {
    let cultures = PermissionModule::crud("cultures");
    let events = PermissionModule::crud("events");

    let mut matrix = PermissionMatrix::new();
    matrix.toggle_permission("events.view");
    matrix.toggle_module(&module_ids(&cultures));

    assert!(matrix.module_fully_granted(&cultures));
    assert!(matrix.is_granted("events.view"));
    assert!(!matrix.module_fully_granted(&events));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Toggling a permission twice returns the set to its original value,
    /// whatever else is granted.
    #[test]
    fn prop_toggle_permission_twice_is_identity(
        granted_mask in 0u16..256,
        pick in 0usize..8,
    ) {
        let catalog = default_catalog();
        let pool: Vec<String> = catalog
            .iter()
            .take(2)
            .flat_map(|m| m.permission_ids.clone())
            .collect();

        let mut matrix = PermissionMatrix::new();
        for (i, id) in pool.iter().enumerate() {
            if granted_mask & (1 << i) != 0 {
                matrix.toggle_permission(id);
            }
        }
        let original = matrix.clone();

        matrix.toggle_permission(&pool[pick]);
        prop_assert_ne!(&matrix, &original);
        matrix.toggle_permission(&pool[pick]);
        prop_assert_eq!(&matrix, &original);
    }

    /// The first module toggle resolves all-or-nothing per the "all granted
    /// before" rule; the second flips it complementarily.
    #[test]
    fn prop_toggle_module_converges(initial_mask in 0u8..16) {
        let module = PermissionModule::crud("events");
        let ids = module_ids(&module);

        let mut matrix = PermissionMatrix::new();
        for (i, id) in ids.iter().enumerate() {
            if initial_mask & (1 << i) != 0 {
                matrix.toggle_permission(id);
            }
        }
        let was_fully_granted = matrix.module_fully_granted(&module);

        matrix.toggle_module(&ids);
        if was_fully_granted {
            prop_assert!(ids.iter().all(|id| !matrix.is_granted(id)));
        } else {
            prop_assert!(matrix.module_fully_granted(&module));
        }

        matrix.toggle_module(&ids);
        if was_fully_granted {
            prop_assert!(matrix.module_fully_granted(&module));
        } else {
            prop_assert!(ids.iter().all(|id| !matrix.is_granted(id)));
        }
    }

    /// Reconstruction only ever yields ids drawn from the catalog.
    #[test]
    fn prop_reconstruction_stays_within_catalog(
        read in any::<bool>(),
        create in any::<bool>(),
        update in any::<bool>(),
        delete in any::<bool>(),
    ) {
        let catalog = default_catalog();
        let grants = vec![ModuleGrant {
            module: "users".to_string(),
            flags: GrantFlags { read, create, update, delete },
        }];

        let matrix = PermissionMatrix::from_grants(&grants, &catalog);
        let users = catalog.iter().find(|m| m.name == "users").unwrap();
        for id in matrix.granted() {
            prop_assert!(users.permission_ids.contains(id));
        }
        let expected = [read, create, update, delete].iter().filter(|f| **f).count();
        prop_assert_eq!(matrix.granted().len(), expected);
    }
}
