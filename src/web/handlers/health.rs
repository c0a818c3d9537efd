//! # Health Check Handlers
//!
//! Kubernetes-compatible probes. Liveness only confirms the process is
//! responsive; readiness additionally verifies the perspective catalog can
//! take a listing snapshot.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

use crate::web::errors::ApiError;
use crate::web::state::AppState;

/// Basic health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Readiness response with per-dependency checks.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HashMap<String, HealthCheck>,
}

/// Individual health check result.
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// Basic health check: `GET /health`
pub async fn basic_health(State(_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

/// Liveness probe: `GET /health/live`
pub async fn liveness_probe(State(_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: crate::VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

/// Readiness probe: `GET /health/ready`
pub async fn readiness_probe(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, ApiError> {
    debug!("Performing readiness probe");

    let start = std::time::Instant::now();
    let catalog_check = match state.perspectives.list_layout_template_names().await {
        Ok(names) => HealthCheck {
            status: "healthy".to_string(),
            message: Some(format!("{} templates", names.len())),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => {
            error!(error = %e, "Perspective catalog readiness check failed");
            HealthCheck {
                status: "unhealthy".to_string(),
                message: Some(format!("Catalog listing failed: {e}")),
                duration_ms: start.elapsed().as_millis() as u64,
            }
        }
    };

    let healthy = catalog_check.status == "healthy";
    let mut checks = HashMap::new();
    checks.insert("perspective_catalog".to_string(), catalog_check);

    let response = ReadinessResponse {
        status: if healthy { "ready" } else { "not_ready" }.to_string(),
        timestamp: Utc::now(),
        checks,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err(ApiError::ServiceUnavailable)
    }
}
