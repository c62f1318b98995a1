//! Migration configuration
//!
//! Every field has a default matching the purchase-requisition database, so
//! the tool runs with no configuration at all. A YAML file may override any
//! subset of them.

use crate::error::{CoreError, CoreResult};
use crate::sql_utils::is_valid_type_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default database file, resolved against the working directory.
pub const DEFAULT_DB_PATH: &str = "purchase_requisition.db";

/// Names and types the assignment migration operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationConfig {
    /// Table being migrated
    #[serde(default = "default_table")]
    pub table: String,

    /// Legacy column the new pair of columns supersedes
    #[serde(default = "default_legacy_column")]
    pub legacy_column: String,

    /// New column receiving the legacy value
    #[serde(default = "default_assignee_column")]
    pub assignee_column: ColumnSpec,

    /// New column receiving the fixed role tag
    #[serde(default = "default_role_column")]
    pub role_column: ColumnSpec,

    /// Role written for every row migrated from the legacy column
    #[serde(default = "default_role_tag")]
    pub role_tag: String,

    /// Non-unique index on the assignee column
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Status column, included in the final schema report
    #[serde(default = "default_status_column")]
    pub status_column: String,

    /// Substring selecting the other columns shown in the final report
    #[serde(default = "default_report_pattern")]
    pub report_pattern: String,
}

/// A column added by the migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,

    /// Declared SQL type
    #[serde(rename = "type")]
    pub sql_type: String,
}

impl ColumnSpec {
    /// Create a column spec from a name and declared type
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            legacy_column: default_legacy_column(),
            assignee_column: default_assignee_column(),
            role_column: default_role_column(),
            role_tag: default_role_tag(),
            index_name: default_index_name(),
            status_column: default_status_column(),
            report_pattern: default_report_pattern(),
        }
    }
}

fn default_table() -> String {
    "requisitions".to_string()
}

fn default_legacy_column() -> String {
    "assigned_hod_id".to_string()
}

fn default_assignee_column() -> ColumnSpec {
    ColumnSpec::new("assigned_to", "INTEGER")
}

fn default_role_column() -> ColumnSpec {
    ColumnSpec::new("assigned_role", "TEXT")
}

fn default_role_tag() -> String {
    "hod".to_string()
}

fn default_index_name() -> String {
    "idx_requisitions_assigned_to".to_string()
}

fn default_status_column() -> String {
    "status".to_string()
}

fn default_report_pattern() -> String {
    "assigned".to_string()
}

impl MigrationConfig {
    /// Load configuration from a YAML file and validate it
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: MigrationConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded migration config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CoreResult<()> {
        let names = [
            ("table", self.table.as_str()),
            ("legacy_column", self.legacy_column.as_str()),
            ("assignee_column.name", self.assignee_column.name.as_str()),
            ("role_column.name", self.role_column.name.as_str()),
            ("index_name", self.index_name.as_str()),
            ("status_column", self.status_column.as_str()),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("'{field}' cannot be empty"),
                });
            }
        }

        if self.assignee_column.name == self.role_column.name {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "assignee and role columns must differ, both are '{}'",
                    self.role_column.name
                ),
            });
        }

        for spec in self.new_columns() {
            if spec.name == self.legacy_column {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "new column '{}' cannot replace the legacy column in place",
                        spec.name
                    ),
                });
            }
            if !is_valid_type_name(&spec.sql_type) {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "column '{}' has unsupported type '{}'",
                        spec.name, spec.sql_type
                    ),
                });
            }
        }

        Ok(())
    }

    /// The columns added by the migration, in the order they are applied
    pub fn new_columns(&self) -> [&ColumnSpec; 2] {
        [&self.assignee_column, &self.role_column]
    }

    /// Whether a column belongs in the post-migration schema report
    pub fn is_reported(&self, column: &str) -> bool {
        column == self.status_column
            || (!self.report_pattern.is_empty() && column.contains(&self.report_pattern))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
