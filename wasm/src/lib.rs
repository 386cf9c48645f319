//! WebAssembly module for the BudayaKu admin UI
//!
//! Provides client-side computation for:
//! - Permission matrix toggles and reconstruction
//! - Rupiah formatting
//! - Dashboard statistics

use rust_decimal::Decimal;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::permissions::*;
pub use shared::stats::*;
pub use shared::types::*;

use shared::models::ModuleGrant;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"budayaku wasm initialized".into());
}

fn parse_ids(granted_json: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(granted_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid granted JSON: {}", e)))
}

fn to_json(ids: Vec<String>) -> Result<String, JsValue> {
    serde_json::to_string(&ids).map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Toggle one permission in a granted set (JSON array of ids)
#[wasm_bindgen]
pub fn toggle_permission(granted_json: &str, id: &str) -> Result<String, JsValue> {
    let mut matrix = PermissionMatrix::from_ids(parse_ids(granted_json)?);
    matrix.toggle_permission(id);
    to_json(matrix.sorted_ids())
}

/// Toggle a whole module row in a granted set
#[wasm_bindgen]
pub fn toggle_module(granted_json: &str, module_ids_json: &str) -> Result<String, JsValue> {
    let ids: Vec<String> = serde_json::from_str(module_ids_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid module ids JSON: {}", e)))?;

    let mut matrix = PermissionMatrix::from_ids(parse_ids(granted_json)?);
    matrix.toggle_module(&ids);
    to_json(matrix.sorted_ids())
}

/// Whether a module's "all" checkbox renders checked
#[wasm_bindgen]
pub fn module_fully_granted(granted_json: &str, module_ids_json: &str) -> Result<bool, JsValue> {
    let ids: Vec<String> = serde_json::from_str(module_ids_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid module ids JSON: {}", e)))?;

    let matrix = PermissionMatrix::from_ids(parse_ids(granted_json)?);
    let module = PermissionModule {
        name: String::new(),
        permission_ids: ids,
    };
    Ok(matrix.module_fully_granted(&module))
}

/// Rebuild a granted set from a role's per-module grant flags
#[wasm_bindgen]
pub fn rebuild_granted(grants_json: &str, catalog_json: &str) -> Result<String, JsValue> {
    let grants: Vec<ModuleGrant> = serde_json::from_str(grants_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid grants JSON: {}", e)))?;
    let catalog: Vec<PermissionModule> = serde_json::from_str(catalog_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid catalog JSON: {}", e)))?;

    let matrix = PermissionMatrix::from_grants(&grants, &catalog);
    to_json(matrix.sorted_ids())
}

/// The default module catalog as JSON, for the role editor grid
#[wasm_bindgen]
pub fn catalog_json() -> Result<String, JsValue> {
    serde_json::to_string(&default_catalog())
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Format an amount as Indonesian Rupiah, e.g. "Rp 1.250.000"
#[wasm_bindgen]
pub fn format_price(amount: &str) -> Result<String, JsValue> {
    let amount = Decimal::from_str(amount)
        .map_err(|e| JsValue::from_str(&format!("Invalid amount: {}", e)))?;
    Ok(format_rupiah(amount))
}

/// Average of a JSON array of amounts, as a decimal string
#[wasm_bindgen]
pub fn average_price(amounts_json: &str) -> Result<String, JsValue> {
    let raw: Vec<String> = serde_json::from_str(amounts_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid amounts JSON: {}", e)))?;
    let amounts = raw
        .iter()
        .map(|s| Decimal::from_str(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| JsValue::from_str(&format!("Invalid amount: {}", e)))?;

    Ok(average(&amounts).to_string())
}
