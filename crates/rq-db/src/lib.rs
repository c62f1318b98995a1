//! rq-db - Database abstraction layer for rq-migrate
//!
//! This crate provides the `Database` trait, the schema snapshot types
//! returned by table inspection, and the SQLite implementation.

pub mod error;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::{DbError, DbResult};
pub use schema::{ColumnDescriptor, SchemaSnapshot};
pub use sqlite::SqliteBackend;
pub use traits::Database;
