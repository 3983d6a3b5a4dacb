//! HTTP-level integration tests for the diagnostic error log.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_vehicle, get_auth, post_json_auth, register_and_login};
use sqlx::PgPool;

/// Appending a batch and listing it back.
#[sqlx::test(migrations = "../db/migrations")]
async fn append_and_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "alice", "secret1").await;
    let id = create_vehicle(&app, &token, "1HGCM82633A123456").await;

    let body = serde_json::json!({ "vehicle_id": id, "codigo_dtc": ["P0300", " P0171 "] });
    let response = post_json_auth(app.clone(), "/api/v1/errors", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, &format!("/api/v1/vehicles/{id}/errors"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["codigo_dtc"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["P0300", "P0171"], "codes are stored trimmed");
}

/// Repeated submissions accumulate rather than replace.
#[sqlx::test(migrations = "../db/migrations")]
async fn batches_accumulate(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "alice", "secret1").await;
    let id = create_vehicle(&app, &token, "1HGCM82633A123456").await;

    for _ in 0..2 {
        let body = serde_json::json!({ "vehicle_id": id, "codigo_dtc": ["P0300"] });
        let response = post_json_auth(app.clone(), "/api/v1/errors", body, &token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app, &format!("/api/v1/vehicles/{id}/errors"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

/// A batch of only blank codes is rejected as empty.
#[sqlx::test(migrations = "../db/migrations")]
async fn blank_batch_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "alice", "secret1").await;
    let id = create_vehicle(&app, &token, "1HGCM82633A123456").await;

    for codes in [serde_json::json!([]), serde_json::json!(["   ", ""])] {
        let body = serde_json::json!({ "vehicle_id": id, "codigo_dtc": codes });
        let response = post_json_auth(app.clone(), "/api/v1/errors", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// A batch with an internal duplicate fails whole: zero rows inserted.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_in_batch_inserts_nothing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "alice", "secret1").await;
    let id = create_vehicle(&app, &token, "1HGCM82633A123456").await;

    let body = serde_json::json!({ "vehicle_id": id, "codigo_dtc": ["P0300", "P0171", " P0300 "] });
    let response = post_json_auth(app.clone(), "/api/v1/errors", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Re-listing confirms nothing landed (empty log answers 404).
    let response = get_auth(app, &format!("/api/v1/vehicles/{id}/errors"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Appending to a vehicle you do not own answers 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn append_to_foreign_vehicle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token_a = register_and_login(&app, "alice", "secret1").await;
    let token_b = register_and_login(&app, "bruno", "secret2").await;
    let id = create_vehicle(&app, &token_a, "1HGCM82633A123456").await;

    let body = serde_json::json!({ "vehicle_id": id, "codigo_dtc": ["P0300"] });
    let response = post_json_auth(app, "/api/v1/errors", body, &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A vehicle with no logged codes answers 404 on the error list.
#[sqlx::test(migrations = "../db/migrations")]
async fn empty_error_log_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "alice", "secret1").await;
    let id = create_vehicle(&app, &token, "1HGCM82633A123456").await;

    let response = get_auth(app, &format!("/api/v1/vehicles/{id}/errors"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Listing errors of a foreign vehicle answers 404, even when it has rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_foreign_vehicle_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token_a = register_and_login(&app, "alice", "secret1").await;
    let token_b = register_and_login(&app, "bruno", "secret2").await;
    let id = create_vehicle(&app, &token_a, "1HGCM82633A123456").await;

    let body = serde_json::json!({ "vehicle_id": id, "codigo_dtc": ["P0300"] });
    let response = post_json_auth(app.clone(), "/api/v1/errors", body, &token_a).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, &format!("/api/v1/vehicles/{id}/errors"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
