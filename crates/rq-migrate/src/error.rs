//! Error types for rq-migrate

use rq_core::CoreError;
use rq_db::DbError;
use thiserror::Error;

/// Migration errors. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Table definition could not be read (M001)
    #[error("[M001] Failed to inspect table '{table}'")]
    Inspect {
        table: String,
        #[source]
        source: DbError,
    },

    /// Legacy column the backfill reads from is missing (M002)
    #[error("[M002] Legacy column '{column}' not found in table '{table}'")]
    LegacyColumnMissing { table: String, column: String },

    /// ALTER TABLE ... ADD COLUMN failed (M003)
    #[error("[M003] Failed to add column '{column}' to '{table}'")]
    AddColumn {
        table: String,
        column: String,
        #[source]
        source: DbError,
    },

    /// Backfill UPDATE failed (M004)
    #[error("[M004] Failed to backfill '{table}' from '{column}'")]
    Backfill {
        table: String,
        column: String,
        #[source]
        source: DbError,
    },

    /// CREATE INDEX failed for a reason other than the index existing (M005)
    #[error("[M005] Failed to create index '{index}'")]
    CreateIndex {
        index: String,
        #[source]
        source: DbError,
    },

    /// Migration configuration is invalid (M006)
    #[error("[M006] Invalid migration config")]
    Config(#[from] CoreError),
}

/// Result type alias for MigrateError
pub type MigrateResult<T> = Result<T, MigrateError>;
