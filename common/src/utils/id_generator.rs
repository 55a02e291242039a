//! Unique ID generator.
//!
//! Provides utilities for generating unique identifiers.

use uuid::Uuid;

/// Generates unique identifiers for various entities.
pub struct IdGenerator;

impl IdGenerator {
    /// Generates a unique run ID.
    ///
    /// # Returns
    /// A unique UUID string.
    pub fn run_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Generates a short unique ID (first 8 characters of UUID).
    ///
    /// # Returns
    /// An 8-character unique string.
    pub fn short_id() -> String {
        Uuid::new_v4().to_string()[..8].to_string()
    }
}
