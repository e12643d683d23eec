//! Cafe API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /random | GET | 随机返回一家咖啡馆 |
//! | /all | GET | 返回全部咖啡馆 |
//! | /search?loc= | GET | 按地区精确检索 |
//! | /add | POST | 新增咖啡馆 (form-encoded) |
//! | /update_price/{id} | PATCH | 更新咖啡价格 |
//! | /report-closed/{id} | DELETE | 删除咖啡馆 (需要 api_key) |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/random", get(handler::random_cafe))
        .route("/all", get(handler::all_cafes))
        .route("/search", get(handler::search_cafes))
        .route("/add", post(handler::add_cafe))
        .route("/update_price/{id}", patch(handler::update_price))
        .route("/report-closed/{id}", delete(handler::report_closed))
}
