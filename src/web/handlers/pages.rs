//! # Page Handlers
//!
//! Permission-checked access to stored page layout templates: a filtered
//! listing of template names and retrieval of a single template's content.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::models::LayoutTemplate;
use crate::web::errors::ApiError;
use crate::web::middleware::Principal;
use crate::web::state::AppState;

/// List the layout template names the caller may read.
///
/// `GET /dashbuilder/pages`
pub async fn get_pages(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<String>>, ApiError> {
    let username = &principal.username;

    let user = state.users.find_user(username).await.map_err(|e| {
        error!(username = %username, error = %e, "User directory lookup failed");
        ApiError::service_failure(format!("Error listing pages for user {username}. {e}"))
    })?;

    if user.is_none() {
        warn!(username = %username, "Unknown user requested page listing");
        return Err(ApiError::not_found(format!(
            "Could not find user with name {username}."
        )));
    }

    let mut names = state
        .perspectives
        .list_layout_template_names()
        .await
        .map_err(|e| {
            error!(username = %username, error = %e, "Layout template listing failed");
            ApiError::service_failure(format!("Error listing pages for user {username}. {e}"))
        })?;
    debug!(username = %username, count = names.len(), "Retrieved layout templates");

    let permissions = state.permissions.user_permissions(username).await.map_err(|e| {
        error!(username = %username, error = %e, "Permission resolution failed");
        ApiError::service_failure(format!("Error listing pages for user {username}. {e}"))
    })?;
    debug!(username = %username, allow_all = permissions.allow_all, "Retrieved permissions");

    // Catalog order is preserved; only inaccessible names drop out
    names.retain(|name| permissions.can_list(name));

    Ok(Json(names))
}

/// Retrieve one layout template by name.
///
/// `GET /dashbuilder/pages/{name}/content`
pub async fn get_page_content(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(name): Path<String>,
) -> Result<Json<LayoutTemplate>, ApiError> {
    let username = &principal.username;

    let permissions = state.permissions.user_permissions(username).await.map_err(|e| {
        error!(username = %username, error = %e, "Permission resolution failed");
        ApiError::service_failure(format!(
            "Error getting pages for perspective: {name}. {e}"
        ))
    })?;

    debug!(username = %username, perspective = %name, "Checking perspective permissions");

    // Per-page reads require an explicit grant; the blanket allow_all flag
    // only widens the listing, never this endpoint.
    if !permissions.has_explicit_grant(&name) {
        let message =
            format!("User {username} does not have permission to access perspective: {name}");
        error!("{message}");
        return Err(ApiError::unauthorized(message));
    }

    match state.perspectives.get_layout_template(&name).await {
        Ok(template) => Ok(Json(template)),
        Err(e) => {
            let message = format!("Error getting pages for perspective: {name}. {e}");
            error!("{message}");
            debug!(error = ?e, perspective = %name, "Layout template lookup failed");
            Err(ApiError::catalog_failure(message))
        }
    }
}
