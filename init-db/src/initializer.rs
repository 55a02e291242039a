//! Schema initialization flow.
//!
//! Connects to the target database, executes the schema script as one batch
//! inside a transaction, commits, and reports the tables present afterwards.

use std::time::{Duration, Instant};

use chrono::Utc;
use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use common::models::{DbType, InitReport};
use common::utils::{IdGenerator, SchemaScript};
use sqlx::{mysql::MySqlPoolOptions, postgres::PgPoolOptions, sqlite::SqlitePoolOptions};
use sqlx::{MySqlPool, PgPool, SqlitePool};
use tracing::{info, warn};

use crate::catalog;

/// Connection pool wrapper for the supported engines.
pub enum DatabasePool {
    /// PostgreSQL connection pool.
    Postgres(PgPool),
    /// MySQL connection pool.
    MySQL(MySqlPool),
    /// SQLite connection pool.
    SQLite(SqlitePool),
}

impl DatabasePool {
    /// Closes the pool and waits for the connection to be released.
    pub async fn close(&self) {
        match self {
            DatabasePool::Postgres(pool) => pool.close().await,
            DatabasePool::MySQL(pool) => pool.close().await,
            DatabasePool::SQLite(pool) => pool.close().await,
        }
    }
}

/// Runs one initialization pass: connect, execute, commit, list tables.
///
/// The pool is closed before returning, success or failure.
pub async fn run(config: &AppConfig) -> AppResult<InitReport> {
    let start = Instant::now();

    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
    let db_type = DbType::from_url(url)?;

    let pool = connect(db_type, url, config).await?;
    info!(db_type = %db_type, "connected to database");

    // 执行 schema 并列出数据表；无论成败都要关闭连接池
    let result = execute_and_verify(&pool, config).await;
    pool.close().await;
    let (statement_count, tables) = result?;

    let report = InitReport {
        run_id: IdGenerator::run_id(),
        db_type,
        schema_path: config.schema_path.clone(),
        statement_count,
        tables,
        duration_ms: start.elapsed().as_millis() as u64,
        finished_at: Utc::now(),
    };
    info!(
        run_id = %report.run_id,
        tables = report.table_count(),
        duration_ms = report.duration_ms,
        "database initialized"
    );
    Ok(report)
}

/// Reads the script, executes it as one committed batch, then lists tables.
async fn execute_and_verify(
    pool: &DatabasePool,
    config: &AppConfig,
) -> AppResult<(usize, Vec<String>)> {
    let raw = std::fs::read_to_string(&config.schema_path)
        .map_err(|e| AppError::SchemaFile(format!("{}: {}", config.schema_path, e)))?;

    let script = SchemaScript::parse(&raw);
    if script.is_empty() {
        warn!(path = %config.schema_path, "schema script contains no statements");
    }

    execute_batch(pool, &raw).await?;
    info!(
        statements = script.statement_count(),
        "schema script executed and committed"
    );

    let tables = catalog::list_tables(pool).await?;
    info!(count = tables.len(), "tables listed from catalog");

    Ok((script.statement_count(), tables))
}

/// Opens a single-connection pool for the engine named by the URL scheme.
async fn connect(db_type: DbType, url: &str, config: &AppConfig) -> AppResult<DatabasePool> {
    let timeout = Duration::from_secs(config.connect_timeout_secs);

    match db_type {
        DbType::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(1)
                .acquire_timeout(timeout)
                .connect(url)
                .await
                .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;
            Ok(DatabasePool::Postgres(pool))
        }
        DbType::MySQL => {
            let pool = MySqlPoolOptions::new()
                .max_connections(1)
                .acquire_timeout(timeout)
                .connect(url)
                .await
                .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;
            Ok(DatabasePool::MySQL(pool))
        }
        DbType::SQLite => {
            // 初始化场景允许自动创建数据库文件
            let url = if url.ends_with(":memory:") || url.contains("mode=") {
                url.to_string()
            } else if url.contains('?') {
                format!("{url}&mode=rwc")
            } else {
                format!("{url}?mode=rwc")
            };
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .acquire_timeout(timeout)
                .connect(&url)
                .await
                .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;
            Ok(DatabasePool::SQLite(pool))
        }
    }
}

/// Executes the whole script as one batch inside a transaction, then commits.
async fn execute_batch(pool: &DatabasePool, sql: &str) -> AppResult<()> {
    match pool {
        DatabasePool::Postgres(pool) => {
            let mut tx = pool
                .begin()
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            sqlx::raw_sql(sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            tx.commit()
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
        }
        DatabasePool::MySQL(pool) => {
            let mut tx = pool
                .begin()
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            sqlx::raw_sql(sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            tx.commit()
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
        }
        DatabasePool::SQLite(pool) => {
            let mut tx = pool
                .begin()
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            sqlx::raw_sql(sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            tx.commit()
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
        }
    }
    Ok(())
}
