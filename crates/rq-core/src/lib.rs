//! rq-core - Core library for rq-migrate
//!
//! This crate provides the migration configuration (which table, which
//! legacy column, which new columns and index) and the SQL identifier
//! helpers shared by the database and migration crates.

pub mod config;
pub mod error;
pub mod sql_utils;

pub use config::{ColumnSpec, MigrationConfig};
pub use error::{CoreError, CoreResult};
