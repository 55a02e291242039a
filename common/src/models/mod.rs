//! Shared data models.

pub mod db_type;
pub mod report;

// Re-export commonly used types
pub use db_type::DbType;
pub use report::InitReport;
