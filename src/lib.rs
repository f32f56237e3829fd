pub mod config;
pub mod db;
pub mod driver;
pub mod error;
pub mod query;
pub mod report;

pub use config::{Config, ReportFormat};
pub use db::{UserRecord, UsersStorage};
pub use error::DemoError;
pub use query::QueryRequest;
