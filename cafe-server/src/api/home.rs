//! 首页路由
//!
//! 返回一个静态 HTML 落地页，列出 API 的各个端点。

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Cafe API</title>
</head>
<body>
    <h1>☕ Cafe API</h1>
    <p>A RESTful API for querying, adding, updating and removing cafes.</p>
    <h2>Endpoints</h2>
    <ul>
        <li><code>GET /random</code> — a random cafe</li>
        <li><code>GET /all</code> — every cafe</li>
        <li><code>GET /search?loc=&lt;location&gt;</code> — cafes at a location</li>
        <li><code>POST /add</code> — add a cafe (form-encoded)</li>
        <li><code>PATCH /update_price/&lt;id&gt;?new_price=&lt;price&gt;</code> — update coffee price</li>
        <li><code>DELETE /report-closed/&lt;id&gt;?api_key=&lt;key&gt;</code> — report a cafe as closed</li>
    </ul>
</body>
</html>
"#;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(home))
}

/// GET / - 落地页
async fn home() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
