//! Shared types and models for the BudayaKu admin application
//!
//! This crate contains types shared between the admin core, the frontend
//! (via WASM), and other components of the system.

pub mod models;
pub mod permissions;
pub mod stats;
pub mod types;
pub mod validation;

pub use models::*;
pub use permissions::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
