//! Common test utilities for integration tests.

// Helpers are shared across test binaries; not every binary uses all of them.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use connectapp_admin_api::{
    app::create_app,
    config::{Config, LoggingConfig, PolicyConfig, SecurityConfig, ServerConfig},
};
use domain::services::LockoutPolicy;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use uuid::Uuid;

/// Test configuration with default policy options.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
            hsts_enabled: false,
        },
        policy: PolicyConfig {
            admins_may_delete_subordinates: true,
            max_bulk_size: 10,
        },
        lockout: LockoutPolicy {
            max_failed_attempts: 3,
            lockout_minutes: 15,
            otp_resend_cooldown_secs: 60,
        },
    }
}

/// Create a test application router.
pub fn create_test_app(config: Config) -> Router {
    create_app(config)
}

/// Minimal administrator snapshot accepted by the decision endpoints.
pub fn admin_snapshot(role: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": Name().fake::<String>(),
        "email": SafeEmail().fake::<String>(),
        "role": role,
    })
}

/// Administrator snapshot with a status.
pub fn admin_with_status(role: &str, status: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": Name().fake::<String>(),
        "email": SafeEmail().fake::<String>(),
        "role": role,
        "status": status,
    })
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}
