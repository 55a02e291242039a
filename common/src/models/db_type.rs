//! Database type model.
//!
//! The engine is selected from the scheme of the connection URL.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Database type enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// PostgreSQL database.
    Postgres,
    /// MySQL / MariaDB database.
    MySQL,
    /// SQLite database.
    SQLite,
}

impl DbType {
    /// Determines the database type from a connection URL scheme.
    ///
    /// # Errors
    /// Returns `AppError::UnsupportedDatabaseType` if the scheme does not
    /// name a supported engine.
    pub fn from_url(url: &str) -> AppResult<Self> {
        let scheme = url.split(':').next().unwrap_or("").to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(DbType::Postgres),
            "mysql" | "mariadb" => Ok(DbType::MySQL),
            "sqlite" => Ok(DbType::SQLite),
            "" => Err(AppError::UnsupportedDatabaseType(
                "connection URL has no scheme".to_string(),
            )),
            other => Err(AppError::UnsupportedDatabaseType(other.to_string())),
        }
    }

    /// Returns the default port for this database type.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            DbType::Postgres => Some(5432),
            DbType::MySQL => Some(3306),
            DbType::SQLite => None,
        }
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::Postgres => write!(f, "postgres"),
            DbType::MySQL => write!(f, "mysql"),
            DbType::SQLite => write!(f, "sqlite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_schemes() {
        assert_eq!(
            DbType::from_url("postgres://user:pw@localhost:5432/app").unwrap(),
            DbType::Postgres
        );
        assert_eq!(
            DbType::from_url("postgresql://localhost/app").unwrap(),
            DbType::Postgres
        );
    }

    #[test]
    fn test_mysql_schemes() {
        assert_eq!(
            DbType::from_url("mysql://root@localhost/app").unwrap(),
            DbType::MySQL
        );
        assert_eq!(
            DbType::from_url("mariadb://root@localhost/app").unwrap(),
            DbType::MySQL
        );
    }

    #[test]
    fn test_sqlite_schemes() {
        assert_eq!(DbType::from_url("sqlite::memory:").unwrap(), DbType::SQLite);
        assert_eq!(
            DbType::from_url("sqlite://data/app.db").unwrap(),
            DbType::SQLite
        );
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = DbType::from_url("oracle://localhost/app").unwrap_err();
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn test_missing_scheme() {
        assert!(DbType::from_url("").is_err());
    }
}
