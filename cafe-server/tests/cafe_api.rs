//! Cafe API end-to-end tests
//!
//! Drives the full axum app in-process with `tower::ServiceExt::oneshot`,
//! backed by a tempfile SQLite database. No sockets involved.

use axum::Router;
use axum::body::Body;
use cafe_server::{Config, ServerState, api};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const SECRET: &str = "TopSecretAPIKey";

async fn test_state(dir: &tempfile::TempDir) -> ServerState {
    let db_path = dir.path().join("cafes.db");
    let config = Config::with_overrides(format!("sqlite:{}", db_path.display()), 0, SECRET);
    ServerState::initialize(&config)
        .await
        .expect("Failed to initialize test state")
}

fn app(state: &ServerState) -> Router {
    api::build_app(state).with_state(state.clone())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn joes_form() -> String {
    // coffee_price carries a £ sign (%C2%A3)
    "name=Joe's&map_url=https://maps.example.com/joes\
     &img_url=https://img.example.com/joes.jpg&location=Soho&seats=20-30\
     &has_toilet=True&has_wifi=True&has_sockets=False&can_take_calls=False\
     &coffee_price=%C2%A32.50"
        .to_string()
}

async fn post_form(state: &ServerState, body: String) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app(state).oneshot(request).await.unwrap()
}

async fn get(state: &ServerState, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app(state).oneshot(request).await.unwrap()
}

async fn send(state: &ServerState, method: &str, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app(state).oneshot(request).await.unwrap()
}

/// Fetch all cafes and return the `cafes` array
async fn list_cafes(state: &ServerState) -> Vec<Value> {
    let response = get(state, "/all").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["cafes"].as_array().unwrap().clone()
}

#[tokio::test]
async fn test_landing_page_and_health() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;

    let response = get(&state, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&state, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_add_then_list_keeps_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;

    let response = post_form(&state, joes_form()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"]["success"],
        "Successfully added a new cafe to the database."
    );

    let cafes = list_cafes(&state).await;
    assert_eq!(cafes.len(), 1);
    let cafe = &cafes[0];
    assert_eq!(cafe["name"], "Joe's");
    assert_eq!(cafe["location"], "Soho");
    assert_eq!(cafe["seats"], "20-30");
    assert_eq!(cafe["coffee_price"], "£2.50");
    // Booleans come back as JSON booleans, not 0/1
    assert_eq!(cafe["has_toilet"], Value::Bool(true));
    assert_eq!(cafe["has_wifi"], Value::Bool(true));
    assert_eq!(cafe["has_sockets"], Value::Bool(false));
    assert_eq!(cafe["can_take_calls"], Value::Bool(false));
    assert!(cafe["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_add_duplicate_name_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;

    assert_eq!(post_form(&state, joes_form()).await.status(), StatusCode::OK);

    let response = post_form(&state, joes_form()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert!(body["error"]["Conflict"].is_string());

    // No duplicate row was created
    assert_eq!(list_cafes(&state).await.len(), 1);
}

#[tokio::test]
async fn test_add_missing_field_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;

    // seats omitted
    let body = "name=Joe's&map_url=u&img_url=u&location=Soho\
                &has_toilet=True&has_wifi=True&has_sockets=False&can_take_calls=False\
                &coffee_price=2.50"
        .to_string();
    let response = post_form(&state, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_rejects_non_canonical_boolean_token() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;

    let body = joes_form().replace("has_wifi=True", "has_wifi=yes");
    let response = post_form(&state, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["error"]["Bad Request"]
            .as_str()
            .unwrap()
            .contains("has_wifi")
    );

    assert!(list_cafes(&state).await.is_empty());
}

#[tokio::test]
async fn test_search_exact_match_and_quirky_miss() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    post_form(&state, joes_form()).await;

    let response = get(&state, "/search?loc=Soho").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let cafes = body["cafes"].as_array().unwrap();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0]["name"], "Joe's");
    assert_eq!(cafes[0]["coffee_price"], "£2.50");

    // Case-sensitive: "soho" is not "Soho"
    let response = get(&state, "/search?loc=soho").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["Not Found"],
        "Sorry, we don't have a cafe at that location"
    );

    // Missing loc behaves like a miss, still HTTP 200
    let response = get(&state, "/search").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["error"].is_object());
}

#[tokio::test]
async fn test_random_cafe() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;

    // Empty table is an explicit 404, not a crash
    let response = get(&state, "/random").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    post_form(&state, joes_form()).await;
    let response = get(&state, "/random").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["cafe"]["name"], "Joe's");
}

#[tokio::test]
async fn test_update_price_changes_only_price() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    post_form(&state, joes_form()).await;
    let before = list_cafes(&state).await.remove(0);
    let id = before["id"].as_i64().unwrap();

    let response = send(&state, "PATCH", &format!("/update_price/{id}?new_price=%C2%A33.10")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["success"],
        "Successfully updated the price."
    );

    let after = list_cafes(&state).await.remove(0);
    assert_eq!(after["coffee_price"], "£3.10");
    for field in ["id", "name", "map_url", "img_url", "location", "seats",
                  "has_toilet", "has_wifi", "has_sockets", "can_take_calls"] {
        assert_eq!(after[field], before[field], "field {field} must be unchanged");
    }
}

#[tokio::test]
async fn test_update_price_unknown_id_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    post_form(&state, joes_form()).await;

    let response = send(&state, "PATCH", "/update_price/9999?new_price=1.00").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"]["Not Found"].is_string());

    // Storage untouched
    let cafes = list_cafes(&state).await;
    assert_eq!(cafes[0]["coffee_price"], "£2.50");
}

#[tokio::test]
async fn test_update_price_missing_param_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    post_form(&state, joes_form()).await;
    let id = list_cafes(&state).await[0]["id"].as_i64().unwrap();

    let response = send(&state, "PATCH", &format!("/update_price/{id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_closed_wrong_key_is_403_and_keeps_row() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    post_form(&state, joes_form()).await;
    let id = list_cafes(&state).await[0]["id"].as_i64().unwrap();

    let response = send(&state, "DELETE", &format!("/report-closed/{id}?api_key=wrong")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    // 403 payload carries a plain string, not an object
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    assert_eq!(list_cafes(&state).await.len(), 1);
}

#[tokio::test]
async fn test_report_closed_with_correct_key_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    post_form(&state, joes_form()).await;
    let id = list_cafes(&state).await[0]["id"].as_i64().unwrap();

    let response =
        send(&state, "DELETE", &format!("/report-closed/{id}?api_key={SECRET}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], "The cafe was deleted");

    assert!(list_cafes(&state).await.is_empty());

    // A second delete for the same id is a 404
    let response =
        send(&state, "DELETE", &format!("/report-closed/{id}?api_key={SECRET}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"]["Not Found"].is_string());
}
