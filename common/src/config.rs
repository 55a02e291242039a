//! Application configuration.
//!
//! All configuration comes from the environment; there are no CLI flags.

/// Default path of the schema script, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "schema.sql";

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for one initialization run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection URL of the target database (`DATABASE_URL`).
    pub database_url: Option<String>,
    /// Path of the SQL schema script (`SCHEMA_FILE`).
    pub schema_path: String,
    /// Connect timeout in seconds (`DB_CONNECT_TIMEOUT_SECS`).
    pub connect_timeout_secs: u64,
    /// Whether to also print the report as JSON (`INIT_REPORT_JSON`).
    pub report_json: bool,
}

impl AppConfig {
    /// 从环境变量加载配置（缺失项使用默认值）
    pub fn load() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            schema_path: std::env::var("SCHEMA_FILE")
                .unwrap_or_else(|_| DEFAULT_SCHEMA_PATH.to_string()),
            connect_timeout_secs: std::env::var("DB_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            report_json: std::env::var("INIT_REPORT_JSON")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

/// Parses a boolean-ish environment flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_truthy() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(parse_flag("on"));
    }

    #[test]
    fn test_parse_flag_falsy() {
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("nope"));
    }
}
