//! 数据库初始化工具公共模块
//!
//! 提供配置加载、错误类型、数据模型与工具函数。

pub mod config;
pub mod errors;
pub mod models;
pub mod utils;
