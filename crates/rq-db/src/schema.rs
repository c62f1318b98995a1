//! Table schema snapshots
//!
//! A [`SchemaSnapshot`] is read fresh from the live table definition every
//! time it is needed and never cached, so presence checks always reflect the
//! current state of the database.

use std::fmt;

/// One column as reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Zero-based ordinal position in the table
    pub position: usize,

    /// Column name
    pub name: String,

    /// Declared type, empty when the column was declared without one
    pub data_type: String,

    /// Whether the column carries a NOT NULL constraint
    pub not_null: bool,

    /// Default value expression, if any
    pub default_value: Option<String>,

    /// Whether the column is part of the primary key
    pub primary_key: bool,
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)
    }
}

/// Ordered column list of a single table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSnapshot {
    table: String,
    columns: Vec<ColumnDescriptor>,
}

impl SchemaSnapshot {
    /// Build a snapshot from columns already sorted by position
    pub fn new(table: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    /// Table the snapshot was read from
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns in table order
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Look up a column by exact name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether a column with exactly this name is present
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Keep only the columns matching `predicate`, preserving order
    pub fn filter<F>(&self, predicate: F) -> SchemaSnapshot
    where
        F: Fn(&ColumnDescriptor) -> bool,
    {
        SchemaSnapshot {
            table: self.table.clone(),
            columns: self
                .columns
                .iter()
                .filter(|c| predicate(c))
                .cloned()
                .collect(),
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if no columns were reported
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
