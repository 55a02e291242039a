//! 数据库初始化工具
//!
//! 一次性执行流程：
//! - 从环境变量读取连接 URL
//! - 连接数据库并执行 schema 脚本
//! - 提交后列出默认 schema 中的数据表
//!
//! 任何错误都在顶层被记录并吞掉，进程始终以退出码 0 结束。

mod catalog;
mod initializer;

use common::config::AppConfig;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present) before anything else
    load_dotenv();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load();
    info!(schema = %config.schema_path, "starting database initialization");

    match initializer::run(&config).await {
        Ok(report) => {
            println!("{report}");
            if config.report_json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => error!(error = %e, "failed to serialize report"),
                }
            }
        }
        Err(e) => {
            // 单一兜底处理：记录错误但不向外传播，退出码保持 0
            error!(error = %e, "database initialization failed");
            println!("Error: {e}");
        }
    }
}

/// Load .env file from the working directory (best-effort, no error if missing).
fn load_dotenv() {
    let env_path = std::path::Path::new(".env");
    if env_path.exists() {
        if let Ok(content) = std::fs::read_to_string(env_path) {
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();
                    // Only set if not already set by the environment
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
        }
    }
}
