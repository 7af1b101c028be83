pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod outcome;
pub mod report;

pub use config::DatabaseConfig;
pub use error::{ConfigError, DbError};
pub use outcome::QueryOutcome;
