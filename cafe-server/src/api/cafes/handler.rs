//! Cafe API Handlers

use axum::{
    Json,
    extract::{Form, Path, Query, State},
    extract::rejection::FormRejection,
};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::repository::cafe;
use crate::utils::{AppError, AppResult, parse_flag};
use shared::models::{AddCafeForm, CafeCreate};

/// GET /random - 随机返回一家咖啡馆
///
/// 空表时返回 404，而不是在空集合上取随机值。
pub async fn random_cafe(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let cafes = cafe::find_all(&state.pool).await?;
    let chosen = cafes
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| AppError::not_found("Sorry, there are no cafes in the database yet"))?;
    Ok(Json(json!({ "cafe": chosen })))
}

/// GET /all - 返回全部咖啡馆
pub async fn all_cafes(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let cafes = cafe::find_all(&state.pool).await?;
    Ok(Json(json!({ "cafes": cafes })))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub loc: Option<String>,
}

/// GET /search?loc= - 按地区精确检索 (区分大小写)
///
/// 零匹配保持历史行为：HTTP 200，载荷中带 error 对象，而不是 404。
pub async fn search_cafes(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Value>> {
    let matched = match params.loc.as_deref() {
        Some(loc) => cafe::find_by_location(&state.pool, loc).await?,
        None => Vec::new(),
    };

    if matched.is_empty() {
        return Ok(Json(json!({
            "error": { "Not Found": "Sorry, we don't have a cafe at that location" }
        })));
    }

    Ok(Json(json!({ "cafes": matched })))
}

/// POST /add - 新增咖啡馆
///
/// 表单缺字段 → 400；布尔字段只接受 True/true/False/false；
/// 店名重复 → 409。
pub async fn add_cafe(
    State(state): State<ServerState>,
    form: Result<Form<AddCafeForm>, FormRejection>,
) -> AppResult<Json<Value>> {
    let Form(form) = form?;
    let data = decode_form(form)?;

    cafe::create(&state.pool, data).await?;

    Ok(Json(json!({
        "response": { "success": "Successfully added a new cafe to the database." }
    })))
}

/// Decode the stringly-typed form into a typed create payload
fn decode_form(form: AddCafeForm) -> Result<CafeCreate, AppError> {
    Ok(CafeCreate {
        has_toilet: parse_flag("has_toilet", &form.has_toilet)?,
        has_wifi: parse_flag("has_wifi", &form.has_wifi)?,
        has_sockets: parse_flag("has_sockets", &form.has_sockets)?,
        can_take_calls: parse_flag("can_take_calls", &form.can_take_calls)?,
        name: form.name,
        map_url: form.map_url,
        img_url: form.img_url,
        location: form.location,
        seats: form.seats,
        coffee_price: Some(form.coffee_price),
    })
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceParams {
    pub new_price: Option<String>,
}

/// PATCH /update_price/{id} - 更新咖啡价格
///
/// 只改 coffee_price，价格串不做格式校验。
pub async fn update_price(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(params): Query<UpdatePriceParams>,
) -> AppResult<Json<Value>> {
    let new_price = params
        .new_price
        .ok_or_else(|| AppError::validation("new_price query parameter is required"))?;

    let updated = cafe::update_price(&state.pool, id, &new_price).await?;
    if !updated {
        return Err(AppError::not_found(
            "Sorry a cafe with that id was not found in the database",
        ));
    }

    Ok(Json(json!({ "success": "Successfully updated the price." })))
}

#[derive(Debug, Deserialize)]
pub struct ReportClosedParams {
    pub api_key: Option<String>,
}

/// DELETE /report-closed/{id} - 删除咖啡馆
///
/// 密钥不匹配时直接 403，不做任何行查询。
pub async fn report_closed(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(params): Query<ReportClosedParams>,
) -> AppResult<Json<Value>> {
    let provided = params.api_key.unwrap_or_default();
    if provided != state.config.secret_key {
        return Err(AppError::forbidden(
            "Sorry, that's not allowed. Make sure you have the correct api_key.",
        ));
    }

    let deleted = cafe::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(
            "Sorry a cafe with that id was not found in the database.",
        ));
    }

    Ok(Json(json!({ "success": "The cafe was deleted" })))
}
