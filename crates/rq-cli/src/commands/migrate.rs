//! Migrate command implementation

use anyhow::{Context, Result};
use rq_core::MigrationConfig;
use rq_db::{Database, SchemaSnapshot, SqliteBackend};
use rq_migrate::{MigrationEvent, MigrationOutcome, MigrationRunner};
use std::sync::Arc;

use crate::cli::Cli;

/// Execute the migration
pub async fn execute(cli: &Cli) -> Result<()> {
    let config = MigrationConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load migration config")?;

    println!("Starting universal assignment migration...");
    if cli.verbose {
        println!("[verbose] Database: {}", cli.database.display());
    }
    println!();

    // The backend owns the only connection; it is closed when `db` and the
    // runner go out of scope at the end of this function, on every path.
    let db: Arc<dyn Database> =
        Arc::new(SqliteBackend::open(&cli.database).context("Failed to connect to database")?);
    log::debug!("Connected to {} database", db.db_type());

    let runner = MigrationRunner::new(db, config).context("Migration failed")?;
    let outcome = runner
        .run(|event| println!("{}", render_event(&event, runner.config())))
        .await
        .context("Migration failed")?;

    println!();
    println!("{}", render_summary(&outcome));
    println!();
    println!("Current schema:");
    print!("{}", render_schema(&outcome.report));
    println!();
    println!("All done!");

    Ok(())
}

/// One progress line per completed step
pub(crate) fn render_event(event: &MigrationEvent, config: &MigrationConfig) -> String {
    match event {
        MigrationEvent::Inspected { table, columns } => {
            format!("Inspected {table} ({columns} columns)")
        }
        MigrationEvent::ColumnAdded { column } => format!("  Added {column} column"),
        MigrationEvent::ColumnPresent { column } => {
            format!("  {column} column already exists, skipping")
        }
        MigrationEvent::Backfilled { rows } => format!(
            "Migrated {rows} {} with {} set",
            if *rows == 1 { "row" } else { "rows" },
            config.legacy_column
        ),
        MigrationEvent::IndexCreated { index } => format!("Index {index} created"),
        MigrationEvent::IndexPresent { index } => format!("Index {index} already exists"),
    }
}

/// Closing summary line
pub(crate) fn render_summary(outcome: &MigrationOutcome) -> String {
    let rows = format!(
        "{} row{} migrated",
        outcome.rows_migrated,
        if outcome.rows_migrated == 1 { "" } else { "s" }
    );
    if outcome.schema_unchanged() {
        return format!("Migration completed successfully: schema already up to date, {rows}");
    }

    let added = outcome.columns_added.len();
    format!(
        "Migration completed successfully: {} column{} added, {}, index {}",
        added,
        if added == 1 { "" } else { "s" },
        rows,
        if outcome.index_created {
            "created"
        } else {
            "already present"
        }
    )
}

/// Indented `name: TYPE` listing of the reported columns
pub(crate) fn render_schema(report: &SchemaSnapshot) -> String {
    if report.is_empty() {
        return "   (no matching columns)\n".to_string();
    }
    report
        .columns()
        .iter()
        .map(|c| format!("   - {c}\n"))
        .collect()
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
