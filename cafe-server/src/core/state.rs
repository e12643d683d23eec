use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 所有 handler 共享的单例引用
///
/// ServerState 持有配置和数据库连接池，使用连接池的浅拷贝实现
/// `Clone`，所有权成本极低。除连接池外没有任何进程内可变共享状态，
/// 每个请求独立执行自己的查询和提交。
///
/// # 字段
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开数据库连接池并确保 `cafe` 表存在。
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.database_url).await?;

        Ok(Self {
            config: config.clone(),
            pool: db_service.pool,
        })
    }
}
