//! # Transfer Web API
//!
//! REST surface for dashboard export and page layout retrieval. `create_app`
//! assembles the router: open health and export routes, authenticated pages
//! routes, and the common middleware stack.

use axum::http::StatusCode;
use axum::Router;
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the transfer web application with all routes and middleware.
pub fn create_app(state: Arc<AppState>) -> Router {
    // Open routes: probes and the export endpoint (no auth checked there)
    let public_routes = Router::new()
        .merge(routes::health_routes())
        .merge(routes::transfer_routes());

    // Pages routes resolve the caller principal before any handler runs
    let protected_routes = routes::pages_routes().layer(axum::middleware::from_fn(
        middleware::auth::authenticate_request,
    ));

    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    let mut app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum::middleware::from_fn(
            middleware::request_id::add_request_id,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    info!(
        cors_enabled = state.config.cors_enabled,
        request_timeout_ms = state.config.request_timeout_ms,
        "Transfer web application created"
    );
    app.with_state(state)
}
