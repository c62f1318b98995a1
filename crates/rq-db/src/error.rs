//! Error types for rq-db

use rusqlite::ErrorCode;
use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table not found: {0}")]
    TableNotFound(String),

    /// Object being created is already defined (D004)
    #[error("[D004] Object already exists: {0}")]
    AlreadyExists(String),

    /// Column being added is already defined (D005)
    #[error("[D005] Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Permission, read-only or lock error (D006)
    #[error("[D006] Database access denied: {0}")]
    PermissionDenied(String),

    /// Disk or database size limit reached (D007)
    #[error("[D007] Database storage full: {0}")]
    StorageFull(String),

    /// Mutex poisoned (D008)
    #[error("[D008] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        let msg = err.to_string();
        // Prepare-time failures arrive as SqlInputError, whose Display appends
        // the statement and offset; classify on the engine's own text.
        let (code, detail) = match &err {
            rusqlite::Error::SqliteFailure(failure, detail) => {
                (failure.code, detail.clone().unwrap_or_else(|| msg.clone()))
            }
            rusqlite::Error::SqlInputError {
                error, msg: detail, ..
            } => (error.code, detail.clone()),
            _ => return DbError::ExecutionError(msg),
        };

        match code {
            ErrorCode::CannotOpen | ErrorCode::NotADatabase => DbError::ConnectionError(msg),
            ErrorCode::PermissionDenied
            | ErrorCode::ReadOnly
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::AuthorizationForStatementDenied => DbError::PermissionDenied(msg),
            ErrorCode::DiskFull | ErrorCode::TooBig => DbError::StorageFull(msg),
            // SQLite reports duplicate objects under the generic SQLITE_ERROR
            // code, so only here is the message text consulted.
            ErrorCode::Unknown => classify_generic_error(&detail, msg),
            _ => DbError::ExecutionError(msg),
        }
    }
}

fn classify_generic_error(detail: &str, msg: String) -> DbError {
    if detail.starts_with("duplicate column name") {
        DbError::DuplicateColumn(msg)
    } else if detail.contains("already exists") {
        DbError::AlreadyExists(msg)
    } else if detail.starts_with("no such table") {
        DbError::TableNotFound(msg)
    } else {
        DbError::ExecutionError(msg)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
