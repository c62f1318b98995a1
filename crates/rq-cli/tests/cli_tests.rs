//! Integration tests driving the rq-migrate binary

use rusqlite::Connection;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn rq_migrate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rq-migrate"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn rq-migrate")
}

fn seeded_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    Connection::open(dir.path().join("purchase_requisition.db"))
        .unwrap()
        .execute_batch(
            "CREATE TABLE requisitions (
                 id INTEGER PRIMARY KEY,
                 status TEXT NOT NULL DEFAULT 'pending',
                 assigned_hod_id INTEGER
             );
             INSERT INTO requisitions (assigned_hod_id) VALUES (7), (12), (7), (NULL), (NULL);",
        )
        .unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn zero_argument_run_succeeds() {
    let dir = seeded_dir();

    let output = rq_migrate(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Added assigned_to column"));
    assert!(out.contains("Added assigned_role column"));
    assert!(out.contains("Migrated 3 rows with assigned_hod_id set"));
    assert!(out.contains("Index idx_requisitions_assigned_to created"));
    assert!(out.contains("   - assigned_to: INTEGER"));
    assert!(out.contains("   - assigned_role: TEXT"));
    assert!(out.contains("   - status: TEXT"));
}

#[test]
fn rerun_reports_existing_state() {
    let dir = seeded_dir();
    assert!(rq_migrate(dir.path(), &[]).status.success());

    let output = rq_migrate(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("assigned_to column already exists, skipping"));
    assert!(out.contains("assigned_role column already exists, skipping"));
    assert!(out.contains("Migrated 3 rows"));
    assert!(out.contains("Index idx_requisitions_assigned_to already exists"));
    assert!(out.contains("schema already up to date, 3 rows migrated"));
}

#[test]
fn missing_database_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = rq_migrate(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to connect to database"));
    assert!(!dir.path().join("purchase_requisition.db").exists());
}

#[test]
fn missing_table_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    Connection::open(dir.path().join("purchase_requisition.db"))
        .unwrap()
        .execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY)")
        .unwrap();

    let output = rq_migrate(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Migration failed"));
    assert!(err.contains("Table not found: requisitions"));
}

#[test]
fn database_flag_overrides_path() {
    let dir = seeded_dir();
    let elsewhere = tempfile::tempdir().unwrap();
    let db = dir.path().join("purchase_requisition.db");

    let output = rq_migrate(elsewhere.path(), &["--database", db.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let conn = Connection::open(&db).unwrap();
    let migrated: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM requisitions WHERE assigned_role = 'hod'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(migrated, 3);
}

#[test]
fn verbose_logs_statements_to_stderr() {
    let dir = seeded_dir();

    let output = rq_migrate(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("ALTER TABLE"));
    assert!(!stdout(&output).contains("ALTER TABLE"));
}
