//! Progress events and the final result of a migration run

use rq_db::SchemaSnapshot;

/// Emitted by [`MigrationRunner::run`](crate::MigrationRunner::run) as each
/// step completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationEvent {
    /// Table definition read before any change
    Inspected { table: String, columns: usize },
    /// Column was missing and has been added
    ColumnAdded { column: String },
    /// Column was already present; no DDL issued
    ColumnPresent { column: String },
    /// Legacy values copied into the new columns
    Backfilled { rows: usize },
    /// Index was missing and has been created
    IndexCreated { index: String },
    /// Index was already present
    IndexPresent { index: String },
}

/// What a single run changed. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// Columns added by this run, in the order they were applied
    pub columns_added: Vec<String>,
    /// Rows whose legacy value was copied (re-counted on every run)
    pub rows_migrated: usize,
    /// Whether this run created the index
    pub index_created: bool,
    /// Post-migration columns relevant to the migration
    pub report: SchemaSnapshot,
}

impl MigrationOutcome {
    /// True when the run issued no DDL at all
    pub fn schema_unchanged(&self) -> bool {
        self.columns_added.is_empty() && !self.index_created
    }
}
