pub use self::error::DatabaseError;
pub use self::models::{BalanceFilter, CustomerAccount};
pub use self::sqlite::{SqliteAccountStore, database_exists};
pub use self::stores::AccountStore;

pub mod error;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod stores;
