pub mod schema;
mod store;

pub use schema::CHINOOK_VERSIONED_SCHEMAS;
pub use store::{BootstrapState, SqliteStore};
