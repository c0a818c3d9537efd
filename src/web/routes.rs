//! Route definitions for the transfer web API.
//!
//! Pages routes require an authenticated principal and are wrapped with the
//! auth middleware in `create_app`; export and health remain open.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::web::{handlers, state::AppState};

/// Health check routes for monitoring and Kubernetes probes.
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/health/live", get(handlers::health::liveness_probe))
        .route("/health/ready", get(handlers::health::readiness_probe))
}

/// Application-state export route.
pub fn transfer_routes() -> Router<Arc<AppState>> {
    Router::new().route("/dashbuilder/export", get(handlers::transfer::export))
}

/// Permission-checked page routes.
pub fn pages_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashbuilder/pages", get(handlers::pages::get_pages))
        .route(
            "/dashbuilder/pages/{name}/content",
            get(handlers::pages::get_page_content),
        )
}
