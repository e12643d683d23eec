//! Repository Module
//!
//! Provides CRUD operations for SQLite tables as free async functions
//! over `&SqlitePool`. Each function issues at most one statement; the
//! storage engine's own transaction isolation is the only isolation.

pub mod cafe;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        // UNIQUE constraint violations are a client error, not a crash
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Repository-level Result type
pub type RepoResult<T> = Result<T, RepoError>;
