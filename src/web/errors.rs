//! # Web API Error Types
//!
//! Error types specific to the HTTP layer and their response conversions.
//! thiserror for structure, axum's `IntoResponse` for the HTTP mapping.
//!
//! Taxonomy: collaborator failures surface as 500 with a message embedding
//! the original error text, denied page access as 401, and missing directory
//! entries as 404. Every failure is terminal for its request; nothing
//! retries.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub request_id: Option<String>,
}

/// Web API errors with HTTP status code mappings.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    ExportFailed { message: String },

    #[error("{message}")]
    CatalogFailure { message: String },

    #[error("{message}")]
    ServiceFailure { message: String },

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn export_failed(message: impl Into<String>) -> Self {
        Self::ExportFailed {
            message: message.into(),
        }
    }

    pub fn catalog_failure(message: impl Into<String>) -> Self {
        Self::CatalogFailure {
            message: message.into(),
        }
    }

    pub fn service_failure(message: impl Into<String>) -> Self {
        Self::ServiceFailure {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::ExportFailed { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_FAILED"),
            ApiError::CatalogFailure { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CATALOG_FAILURE")
            }
            ApiError::ServiceFailure { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SERVICE_FAILURE")
            }
            ApiError::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
        };

        let body = ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
            timestamp: Utc::now(),
            request_id: None,
        };

        // The request-id middleware fills in `request_id` from this extension
        // before the response leaves the stack
        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}
