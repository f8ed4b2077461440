//! Error-shape integration tests: every failure returns the JSON
//! `{error, code}` body with the documented status code.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/no-such-route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_not_found_body_has_error_and_code(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/characters/424242/quests").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("Character"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_non_numeric_path_param_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/characters/not-a-number/quests").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_malformed_json_body_is_rejected(pool: PgPool) {
    // Missing required `name` field.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/characters", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
