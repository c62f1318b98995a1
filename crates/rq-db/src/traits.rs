//! Database trait definition

use crate::error::DbResult;
use crate::schema::SchemaSnapshot;
use async_trait::async_trait;

/// Database abstraction trait for rq-migrate
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute SQL that modifies data, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute SQL with positional text parameters, returns affected rows
    async fn execute_with_params(&self, sql: &str, params: &[&str]) -> DbResult<usize>;

    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Read the current column list of `table`.
    ///
    /// Fails with `TableNotFound` when the table does not exist.
    async fn describe_table(&self, table: &str) -> DbResult<SchemaSnapshot>;

    /// Check if a table, view or index exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Execute query returning row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
