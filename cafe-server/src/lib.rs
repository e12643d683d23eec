//! Cafe API Server - 单资源 CRUD 服务
//!
//! # 架构概述
//!
//! 一个很薄的 HTTP ↔ 存储胶水层：每个 handler 最多执行一次查询和
//! 一次响应序列化，没有缓存、没有跨请求的共享可变状态。
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 连接池和仓储层
//! └── utils/         # 错误、日志、校验工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
///
/// 必须在读取 [`Config`] 之前调用，否则 `.env` 中的变量不生效。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; absence is not an error
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), None);

    Ok(())
}

/// 打印启动横幅
pub fn print_banner() {
    tracing::info!("==========================================");
    tracing::info!("  ☕ Cafe API Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("==========================================");
}
