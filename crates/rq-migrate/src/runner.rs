//! Migration runner
//!
//! Step order: inspect, add the assignee column if missing, add the role
//! column if missing, backfill from the legacy column, ensure the index,
//! report. Each step commits on its own (no wrapping transaction), and each
//! leaves the table in a state the next run can resume from.

use crate::error::{MigrateError, MigrateResult};
use crate::outcome::{MigrationEvent, MigrationOutcome};
use rq_core::sql_utils::quote_ident;
use rq_core::{ColumnSpec, MigrationConfig};
use rq_db::{Database, DbError, SchemaSnapshot};
use std::sync::Arc;

/// Applies the assignment migration to one table
pub struct MigrationRunner {
    db: Arc<dyn Database>,
    config: MigrationConfig,
}

impl MigrationRunner {
    /// Create a runner over an open database handle.
    ///
    /// The configuration is validated here so that nothing touches the
    /// database when it is malformed.
    pub fn new(db: Arc<dyn Database>, config: MigrationConfig) -> MigrateResult<Self> {
        config.validate()?;
        Ok(Self { db, config })
    }

    /// Configuration in effect
    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Read the current column list of the target table. No side effects.
    pub async fn inspect_schema(&self) -> MigrateResult<SchemaSnapshot> {
        self.db
            .describe_table(&self.config.table)
            .await
            .map_err(|source| MigrateError::Inspect {
                table: self.config.table.clone(),
                source,
            })
    }

    /// Add `column` unless the table already has it.
    ///
    /// Presence is checked against a fresh snapshot before issuing DDL.
    /// Returns whether the column was added. A duplicate-column error from the
    /// engine means another process won the race and is returned as fatal.
    pub async fn ensure_column(&self, column: &ColumnSpec) -> MigrateResult<bool> {
        let snapshot = self.inspect_schema().await?;
        if snapshot.has_column(&column.name) {
            log::debug!(
                "Column {}.{} already present",
                self.config.table,
                column.name
            );
            return Ok(false);
        }

        let sql = format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            quote_ident(&self.config.table),
            quote_ident(&column.name),
            column.sql_type.trim()
        );
        self.db
            .execute(&sql)
            .await
            .map_err(|source| MigrateError::AddColumn {
                table: self.config.table.clone(),
                column: column.name.clone(),
                source,
            })?;

        log::info!("Added column {}.{}", self.config.table, column.name);
        Ok(true)
    }

    /// Copy the legacy value into the assignee column and stamp the role tag
    /// on every row whose legacy value is non-null.
    ///
    /// Runs unconditionally: the overwrite is a deterministic function of the
    /// legacy column, so repeating it yields the same data. Returns the number
    /// of rows matched.
    pub async fn backfill(&self) -> MigrateResult<usize> {
        let legacy = quote_ident(&self.config.legacy_column);
        let sql = format!(
            "UPDATE {table} SET {assignee} = {legacy}, {role} = ?1 WHERE {legacy} IS NOT NULL",
            table = quote_ident(&self.config.table),
            assignee = quote_ident(&self.config.assignee_column.name),
            role = quote_ident(&self.config.role_column.name),
            legacy = legacy,
        );

        let rows = self
            .db
            .execute_with_params(&sql, &[self.config.role_tag.as_str()])
            .await
            .map_err(|source| MigrateError::Backfill {
                table: self.config.table.clone(),
                column: self.config.legacy_column.clone(),
                source,
            })?;

        log::info!("Backfilled {rows} rows in {}", self.config.table);
        Ok(rows)
    }

    /// Create a non-unique index on `table(column)` named `name`.
    ///
    /// An "already exists" failure counts as success and returns `false`; the
    /// classification comes from [`DbError::AlreadyExists`] rather than a
    /// second schema query. Any other failure is fatal.
    pub async fn ensure_index(&self, name: &str, table: &str, column: &str) -> MigrateResult<bool> {
        let sql = format!(
            "CREATE INDEX {} ON {}({})",
            quote_ident(name),
            quote_ident(table),
            quote_ident(column)
        );

        match self.db.execute(&sql).await {
            Ok(_) => {
                log::info!("Created index {name} on {table}({column})");
                Ok(true)
            }
            Err(DbError::AlreadyExists(msg)) => {
                log::debug!("Index {name} already exists: {msg}");
                Ok(false)
            }
            Err(source) => Err(MigrateError::CreateIndex {
                index: name.to_string(),
                source,
            }),
        }
    }

    /// Post-migration columns relevant to this migration: the status column
    /// and every column matching the report pattern.
    pub async fn report(&self) -> MigrateResult<SchemaSnapshot> {
        let snapshot = self.inspect_schema().await?;
        Ok(snapshot.filter(|c| self.config.is_reported(&c.name)))
    }

    /// Run every step in order, reporting progress to `observer`.
    ///
    /// Stops at the first error. Steps already completed stay committed.
    pub async fn run<F>(&self, mut observer: F) -> MigrateResult<MigrationOutcome>
    where
        F: FnMut(MigrationEvent),
    {
        let snapshot = self.inspect_schema().await?;
        observer(MigrationEvent::Inspected {
            table: snapshot.table().to_string(),
            columns: snapshot.len(),
        });

        if !snapshot.has_column(&self.config.legacy_column) {
            return Err(MigrateError::LegacyColumnMissing {
                table: self.config.table.clone(),
                column: self.config.legacy_column.clone(),
            });
        }

        let mut columns_added = Vec::new();
        for column in self.config.new_columns() {
            if self.ensure_column(column).await? {
                columns_added.push(column.name.clone());
                observer(MigrationEvent::ColumnAdded {
                    column: column.name.clone(),
                });
            } else {
                observer(MigrationEvent::ColumnPresent {
                    column: column.name.clone(),
                });
            }
        }

        let rows_migrated = self.backfill().await?;
        observer(MigrationEvent::Backfilled {
            rows: rows_migrated,
        });

        let index = self.config.index_name.as_str();
        let index_created = self
            .ensure_index(
                index,
                &self.config.table,
                &self.config.assignee_column.name,
            )
            .await?;
        let event = if index_created {
            MigrationEvent::IndexCreated {
                index: index.to_string(),
            }
        } else {
            MigrationEvent::IndexPresent {
                index: index.to_string(),
            }
        };
        observer(event);

        let report = self.report().await?;

        Ok(MigrationOutcome {
            columns_added,
            rows_migrated,
            index_created,
            report,
        })
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
