//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`] 及其 HTTP 响应映射。
//!
//! # 响应格式
//!
//! 错误载荷沿用对外 API 的历史格式：除 403 外，`error` 字段是一个
//! 以错误类别为键的对象；403 的 `error` 字段是纯字符串。
//!
//! | 变体 | 状态码 | 载荷 |
//! |------|--------|------|
//! | Validation | 400 | `{"error": {"Bad Request": msg}}` |
//! | Forbidden | 403 | `{"error": msg}` |
//! | NotFound | 404 | `{"error": {"Not Found": msg}}` |
//! | Conflict | 409 | `{"error": {"Conflict": msg}}` |
//! | Database / Internal | 500 | `{"error": {"Internal Server Error": ...}}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Permission denied: {0}")]
    /// 无权限 (403)
    Forbidden(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "Bad Request": msg } }),
            ),

            // 403 载荷中的 error 是字符串而非对象
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "Not Found": msg } }),
            ),

            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                json!({ "error": { "Conflict": msg } }),
            ),

            // 记录内部错误但不暴露详细信息
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": { "Internal Server Error": "A database error occurred" } }),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": { "Internal Server Error": "An internal error occurred" } }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// 表单解析失败 (缺字段、非法编码) 统一映射为 400 验证错误
impl From<axum::extract::rejection::FormRejection> for AppError {
    fn from(rejection: axum::extract::rejection::FormRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
