//! # Request ID Middleware
//!
//! Generates a unique ID per HTTP request, runs the rest of the stack inside
//! a span carrying it, and stamps it onto the outgoing response: the
//! `x-request-id` header always, and the body of JSON error responses built
//! by [`ApiError`](crate::web::errors::ApiError).

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use crate::web::errors::ErrorResponse;

/// Request ID wrapper for extension storage.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Correlates everything a request produces under one ID: span fields,
/// the `x-request-id` response header, and error bodies.
pub async fn add_request_id(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    // Error handlers leave their body in the extensions so the ID can be
    // filled in here, where it is known
    if let Some(body) = response.extensions_mut().remove::<ErrorResponse>() {
        let status = response.status();
        let body = ErrorResponse {
            request_id: Some(request_id.clone()),
            ..body
        };
        response = (status, Json(body)).into_response();
    }

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}
