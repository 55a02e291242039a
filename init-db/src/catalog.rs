//! Catalog introspection.
//!
//! Lists the tables present in the default schema after initialization. Each
//! engine exposes a different catalog view:
//! - PostgreSQL: `information_schema.tables` for the `public` schema
//! - MySQL: `information_schema.tables` for the current database
//! - SQLite: `sqlite_master`, excluding internal `sqlite_%` tables

use common::errors::{AppError, AppResult};
use sqlx::Row;

use crate::initializer::DatabasePool;

/// Returns the table names in the default schema, sorted by name.
pub async fn list_tables(pool: &DatabasePool) -> AppResult<Vec<String>> {
    match pool {
        DatabasePool::Postgres(pool) => {
            let rows = sqlx::query(
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema = 'public' \
                 ORDER BY table_name",
            )
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

            Ok(rows
                .iter()
                .map(|row| row.try_get::<String, _>("table_name").unwrap_or_default())
                .collect())
        }
        DatabasePool::MySQL(pool) => {
            let rows = sqlx::query(
                "SELECT TABLE_NAME AS table_name FROM information_schema.tables \
                 WHERE TABLE_SCHEMA = DATABASE() \
                 ORDER BY TABLE_NAME",
            )
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

            Ok(rows
                .iter()
                .map(|row| row.try_get::<String, _>("table_name").unwrap_or_default())
                .collect())
        }
        DatabasePool::SQLite(pool) => {
            let rows = sqlx::query(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name",
            )
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

            Ok(rows
                .iter()
                .map(|row| row.try_get::<String, _>("name").unwrap_or_default())
                .collect())
        }
    }
}
