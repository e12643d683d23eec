/// 服务器配置 - Cafe API 的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:cafes.db | 数据库连接串 |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | TOP_SECRET_KEY | (空) | 删除操作的共享密钥 |
/// | LOG_LEVEL | info | 日志级别 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/cafes.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据库连接串 (file-based SQLite by default)
    pub database_url: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 删除操作的共享密钥 (`/report-closed` 校验用)
    pub secret_key: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cafes.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            secret_key: std::env::var("TOP_SECRET_KEY").unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        database_url: impl Into<String>,
        http_port: u16,
        secret_key: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config.secret_key = secret_key.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
