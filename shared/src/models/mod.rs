//! Domain models for the BudayaKu admin application

mod culture;
mod event;
mod role;
mod store;
mod user;

pub use culture::*;
pub use event::*;
pub use role::*;
pub use store::*;
pub use user::*;
