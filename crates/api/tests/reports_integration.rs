//! Integration tests for the post report moderation endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, get_request, json_request, parse_response_body, test_config};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

const TRANSITION: &str = "/api/admin/v1/reports/transition";
const APPLY: &str = "/api/admin/v1/reports/apply";

fn pending_report() -> Value {
    json!({
        "id": Uuid::new_v4(),
        "post_id": Uuid::new_v4(),
        "reporter_id": Uuid::new_v4(),
        "reason": "harassment",
        "status": "pending",
        "created_at": "2026-01-05T10:00:00Z",
    })
}

#[tokio::test]
async fn test_pending_to_under_review() {
    let app = create_test_app(test_config());

    let request = json_request(
        Method::POST,
        TRANSITION,
        json!({"current": "pending", "requested": "under_review"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "under_review");
}

#[tokio::test]
async fn test_resolved_cannot_return_to_pending() {
    let app = create_test_app(test_config());

    let request = json_request(
        Method::POST,
        TRANSITION,
        json!({"current": "resolved", "requested": "pending"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "conflict");
    assert!(!body["message"].as_str().unwrap().contains("resolved"));
}

#[tokio::test]
async fn test_self_transition_rejected() {
    let app = create_test_app(test_config());

    let request = json_request(
        Method::POST,
        TRANSITION,
        json!({"current": "under_review", "requested": "under_review"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_next_statuses() {
    let app = create_test_app(test_config());

    let response = app
        .oneshot(get_request("/api/admin/v1/reports/statuses/under_review/next"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["next"], json!(["dismissed", "action_taken", "resolved"]));
}

#[tokio::test]
async fn test_next_statuses_terminal_is_empty() {
    let app = create_test_app(test_config());

    let response = app
        .oneshot(get_request("/api/admin/v1/reports/statuses/dismissed/next"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["next"], json!([]));
}

#[tokio::test]
async fn test_next_statuses_unknown_status() {
    let app = create_test_app(test_config());

    let response = app
        .oneshot(get_request("/api/admin/v1/reports/statuses/closed/next"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_apply_keeps_first_reviewer() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let app = create_test_app(test_config());
    let request = json_request(
        Method::POST,
        APPLY,
        json!({"report": pending_report(), "reviewer_id": first, "status": "under_review"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reviewed = parse_response_body(response).await;
    assert_eq!(reviewed["reviewed_by"], first.to_string());

    let app = create_test_app(test_config());
    let request = json_request(
        Method::POST,
        APPLY,
        json!({"report": reviewed, "reviewer_id": second, "status": "resolved"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let resolved = parse_response_body(response).await;
    assert_eq!(resolved["status"], "resolved");
    assert_eq!(resolved["reviewed_by"], first.to_string());
}

#[tokio::test]
async fn test_apply_rejects_reopening() {
    let mut report = pending_report();
    report["status"] = json!("dismissed");

    let app = create_test_app(test_config());
    let request = json_request(
        Method::POST,
        APPLY,
        json!({"report": report, "reviewer_id": Uuid::new_v4(), "status": "pending"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
