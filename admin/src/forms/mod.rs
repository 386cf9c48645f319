//! Draft types for the admin dialogs, one per entity

mod categories;
mod culture;
mod event;
mod role;
mod store;
mod user;

pub use categories::*;
pub use culture::*;
pub use event::*;
pub use role::*;
pub use store::*;
pub use user::*;
