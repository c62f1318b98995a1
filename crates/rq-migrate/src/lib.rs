//! rq-migrate - Idempotent migration runner
//!
//! Brings the requisitions table from any prior state (pristine, partially
//! migrated, fully migrated) to the fully migrated state. Every step is
//! either guarded by a presence check or a deterministic overwrite, so a run
//! that fails partway through can simply be repeated.

pub mod error;
pub mod outcome;
pub mod runner;

pub use error::{MigrateError, MigrateResult};
pub use outcome::{MigrationEvent, MigrationOutcome};
pub use runner::MigrationRunner;
