//! Site HTTP Routes
//!
//! The landing page at `/` and a health check at `/health`.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Landing page, embedded at build time
pub const LANDING_PAGE: &str = include_str!("../../public/index.html");

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create site routes
pub fn site_routes() -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/health", get(health_handler))
}

async fn landing_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
