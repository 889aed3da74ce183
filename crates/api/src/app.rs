use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::{AccessPolicy, LockoutPolicy};

use crate::config::Config;
use crate::middleware::{security_headers_middleware, trace_id};
use crate::routes::{access, health, permissions, reports, roles};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub policy: AccessPolicy,
    pub lockout: LockoutPolicy,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            policy: config.policy.access_policy(),
            lockout: config.lockout,
            config: Arc::new(config),
        }
    }
}

pub fn create_app(config: Config) -> Router {
    let state = AppState::new(config);
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Policy decision routes; every request carries its own actor snapshot
    let admin_routes = Router::new()
        .nest("/roles", roles::router())
        .nest("/permissions", permissions::router())
        .nest("/access", access::router())
        .nest("/reports", reports::router());

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live));

    Router::new()
        .merge(public_routes)
        .nest("/api/admin/v1", admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
