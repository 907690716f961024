pub mod category;
pub mod error;
pub mod schema;
pub mod store;

pub use category::{CategoryRow, CategoryTable, table_for};
pub use error::StoreError;
pub use store::{UpsertOutcome, WordStore, WordUpsert};
