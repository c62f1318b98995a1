use super::*;
use rq_db::ColumnDescriptor;
use std::path::PathBuf;
use tempfile::tempdir;

fn col(position: usize, name: &str, data_type: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        position,
        name: name.to_string(),
        data_type: data_type.to_string(),
        not_null: false,
        default_value: None,
        primary_key: false,
    }
}

fn report() -> SchemaSnapshot {
    SchemaSnapshot::new(
        "requisitions",
        vec![
            col(2, "status", "TEXT"),
            col(3, "assigned_hod_id", "INTEGER"),
            col(4, "assigned_to", "INTEGER"),
            col(5, "assigned_role", "TEXT"),
        ],
    )
}

#[test]
fn test_render_events() {
    let config = MigrationConfig::default();
    assert_eq!(
        render_event(
            &MigrationEvent::ColumnAdded {
                column: "assigned_to".to_string()
            },
            &config
        ),
        "  Added assigned_to column"
    );
    assert_eq!(
        render_event(&MigrationEvent::Backfilled { rows: 3 }, &config),
        "Migrated 3 rows with assigned_hod_id set"
    );
    assert_eq!(
        render_event(&MigrationEvent::Backfilled { rows: 1 }, &config),
        "Migrated 1 row with assigned_hod_id set"
    );
    assert_eq!(
        render_event(
            &MigrationEvent::IndexPresent {
                index: "idx_requisitions_assigned_to".to_string()
            },
            &config
        ),
        "Index idx_requisitions_assigned_to already exists"
    );
}

#[test]
fn test_render_summary() {
    let outcome = MigrationOutcome {
        columns_added: vec!["assigned_to".to_string(), "assigned_role".to_string()],
        rows_migrated: 3,
        index_created: true,
        report: report(),
    };
    assert_eq!(
        render_summary(&outcome),
        "Migration completed successfully: 2 columns added, 3 rows migrated, index created"
    );

    let rerun = MigrationOutcome {
        columns_added: vec![],
        rows_migrated: 1,
        index_created: false,
        report: report(),
    };
    assert_eq!(
        render_summary(&rerun),
        "Migration completed successfully: schema already up to date, 1 row migrated"
    );

    let resumed = MigrationOutcome {
        columns_added: vec!["assigned_role".to_string()],
        rows_migrated: 0,
        index_created: false,
        report: report(),
    };
    assert_eq!(
        render_summary(&resumed),
        "Migration completed successfully: 1 column added, 0 rows migrated, index already present"
    );
}

#[test]
fn test_render_schema() {
    assert_eq!(
        render_schema(&report()),
        "   - status: TEXT\n   - assigned_hod_id: INTEGER\n   - assigned_to: INTEGER\n   - assigned_role: TEXT\n"
    );
    assert_eq!(
        render_schema(&SchemaSnapshot::new("requisitions", vec![])),
        "   (no matching columns)\n"
    );
}

#[tokio::test]
async fn test_execute_migrates_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("purchase_requisition.db");
    rusqlite::Connection::open(&path)
        .unwrap()
        .execute_batch(
            "CREATE TABLE requisitions (id INTEGER PRIMARY KEY, status TEXT, assigned_hod_id INTEGER);
             INSERT INTO requisitions VALUES (1, 'pending', 9), (2, 'pending', NULL);",
        )
        .unwrap();

    let cli = Cli {
        database: path.clone(),
        config: None,
        verbose: false,
    };
    execute(&cli).await.unwrap();
    execute(&cli).await.unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    let migrated: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM requisitions WHERE assigned_to = 9 AND assigned_role = 'hod'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(migrated, 1);
}

#[tokio::test]
async fn test_execute_missing_database() {
    let dir = tempdir().unwrap();
    let cli = Cli {
        database: dir.path().join("purchase_requisition.db"),
        config: None,
        verbose: false,
    };

    let err = execute(&cli).await.unwrap_err();
    assert!(err.to_string().contains("Failed to connect to database"));
    assert!(!cli.database.exists());
}

#[tokio::test]
async fn test_execute_bad_config_fails_before_connecting() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("migration.yml");
    std::fs::write(&config_path, "role_column:\n  name: assigned_role\n  type: \"TEXT;\"\n").unwrap();

    let cli = Cli {
        database: PathBuf::from("/nonexistent/purchase_requisition.db"),
        config: Some(config_path),
        verbose: false,
    };

    let err = execute(&cli).await.unwrap_err();
    assert!(err.to_string().contains("Failed to load migration config"));
}
