//! Database module: the `USERS` table and the single SQLite handle.
//!
//! Layout:
//! - `models.rs`: `UserRecord` and row decoding
//! - `schema.rs`: DDL and seed rows
//! - `sqlite.rs`: `UsersStorage`, the connection wrapper

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::UserRecord;
pub use schema::{SEED_USERS, USERS_DDL};
pub use sqlite::UsersStorage;
