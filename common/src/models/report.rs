//! Initialization report model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::DbType;

/// Summary of one initialization run.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    /// Unique run identifier (for log correlation).
    pub run_id: String,
    /// Target database engine.
    pub db_type: DbType,
    /// Path of the executed schema script.
    pub schema_path: String,
    /// Number of statements found in the script.
    pub statement_count: usize,
    /// Tables present in the default schema after the run, sorted by name.
    pub tables: Vec<String>,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Completion timestamp.
    pub finished_at: DateTime<Utc>,
}

impl InitReport {
    /// Number of tables present after the run.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl std::fmt::Display for InitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Created {} tables: [{}]",
            self.tables.len(),
            self.tables.join(", ")
        )
    }
}
