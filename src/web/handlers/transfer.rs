//! # Export Handler
//!
//! `GET /dashbuilder/export`: requests a full-scope export artifact from the
//! export collaborator, reads its bytes back, and returns them as a zip
//! response. No retry, no partial output; any collaborator failure is
//! terminal for the request.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::models::DataTransferExportModel;
use crate::web::errors::ApiError;
use crate::web::state::AppState;

/// Export the entire application state as a zip archive.
pub async fn export(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let artifact = match state
        .transfer
        .do_export(DataTransferExportModel::export_all())
        .await
    {
        Ok(artifact) => artifact,
        Err(e) => {
            let message = format!("Error creating export: {e}");
            error!("{message}");
            debug!(error = ?e, "Not able to create export");
            return Err(ApiError::export_failed(message));
        }
    };

    info!(artifact = %artifact.display(), "Export created");

    let bytes = match state.file_reader.read_all_bytes(&artifact).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let message = format!("Error creating export: {e}");
            error!("{message}");
            debug!(error = ?e, artifact = %artifact.display(), "Not able to read export artifact");
            return Err(ApiError::export_failed(message));
        }
    };

    Ok(([(header::CONTENT_TYPE, "application/zip")], bytes))
}
