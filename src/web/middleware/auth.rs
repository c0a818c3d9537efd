//! # Authentication Middleware
//!
//! Resolves the caller principal from the HTTP Basic `Authorization` header
//! and stores it in request extensions for handlers to consume. A request
//! with a missing or malformed credential is rejected with 401 here, so
//! handlers never observe an absent principal.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::web::errors::ApiError;

/// The authenticated caller identity.
#[derive(Debug, Clone)]
pub struct Principal {
    pub username: String,
}

/// Authentication middleware for the pages endpoints.
pub async fn authenticate_request(
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok());

    let principal = match header {
        Some(value) => parse_basic_credentials(value)?,
        None => {
            warn!("Request missing authentication credentials");
            return Err(ApiError::unauthorized("Missing authentication credentials"));
        }
    };

    debug!(username = %principal.username, "Request authenticated");
    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Extract the username from a `Basic` credential.
fn parse_basic_credentials(header: &str) -> Result<Principal, ApiError> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use Basic scheme"))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::unauthorized("Malformed Basic credential"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::unauthorized("Malformed Basic credential"))?;

    let (username, _password) = decoded
        .split_once(':')
        .ok_or_else(|| ApiError::unauthorized("Malformed Basic credential"))?;

    if username.is_empty() {
        return Err(ApiError::unauthorized("Empty username"));
    }

    Ok(Principal {
        username: username.to_string(),
    })
}
