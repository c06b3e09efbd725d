use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{health, password};
use crate::rate_limit::RateLimiter;

/// Largest accepted request body. Both request shapes are tiny. Enforced by
/// the JSON extractor so an overflow still answers with an error body.
const BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub max_length: usize,
    pub rate_limiter: RateLimiter,
}

pub fn build(config: &ServerConfig) -> Router {
    let state = AppState {
        max_length: config.max_length,
        rate_limiter: RateLimiter::new(config.rate_limit, 60),
    };

    let cors = build_cors_layer(&config.cors_origins);

    Router::new()
        .route("/health", get(health::health))
        .route("/generate-password", post(password::generate_password))
        .route("/analyze-password", post(password::analyze_password))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if origins.is_empty() {
        // Local browser development works out of the box; deployments set
        // PK_CORS_ORIGINS explicitly.
        cors.allow_origin(AllowOrigin::exact(HeaderValue::from_static(
            "http://localhost",
        )))
    } else {
        let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(AllowOrigin::list(parsed))
    }
}
