//! Database Module
//!
//! Handles SQLite connection pool and schema bootstrap

pub mod repository;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// `cafe` 表结构，启动时幂等创建
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cafe (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL UNIQUE,
    map_url        TEXT NOT NULL,
    img_url        TEXT NOT NULL,
    location       TEXT NOT NULL,
    seats          TEXT NOT NULL,
    has_toilet     BOOLEAN NOT NULL,
    has_wifi       BOOLEAN NOT NULL,
    has_sockets    BOOLEAN NOT NULL,
    can_take_calls BOOLEAN NOT NULL,
    coffee_price   TEXT
);
"#;

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Create a new database service with WAL mode and the cafe schema ensured
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        // Build connection options: WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: 写冲突时等待 5s 而非立即失败
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        // Ensure schema (idempotent; migration tooling is out of scope)
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create schema: {e}")))?;
        tracing::info!("Cafe table ensured");

        Ok(Self { pool })
    }
}
