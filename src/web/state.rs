//! # Web Application State
//!
//! Shared state for the HTTP layer: the web configuration plus the five
//! collaborator interfaces, held as trait objects so tests can swap in mocks.
//! Pure interface composition, no inheritance anywhere.

use std::sync::Arc;
use tracing::info;

use crate::config::{TransferConfig, WebConfig};
use crate::error::ServiceResult;
use crate::services::{
    DataTransferServices, FileReader, FsPerspectiveCatalog, LocalFileReader, PermissionResolver,
    PerspectiveCatalog, SecurityRegistry, StaticPermissionResolver, StaticUserDirectory,
    UserDirectory, ZipExportService,
};

/// Shared state for all request handlers.
pub struct AppState {
    pub config: WebConfig,
    pub transfer: Arc<dyn DataTransferServices>,
    pub file_reader: Arc<dyn FileReader>,
    pub perspectives: Arc<dyn PerspectiveCatalog>,
    pub permissions: Arc<dyn PermissionResolver>,
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Compose state from explicit collaborators. Tests use this with
    /// in-memory mocks.
    pub fn new(
        config: WebConfig,
        transfer: Arc<dyn DataTransferServices>,
        file_reader: Arc<dyn FileReader>,
        perspectives: Arc<dyn PerspectiveCatalog>,
        permissions: Arc<dyn PermissionResolver>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            config,
            transfer,
            file_reader,
            perspectives,
            permissions,
            users,
        }
    }

    /// Wire the production filesystem-backed collaborators from
    /// configuration.
    pub async fn from_config(config: &TransferConfig) -> ServiceResult<Arc<Self>> {
        let registry = SecurityRegistry::load(&config.security.users_file).await?;

        info!(
            data_dir = %config.storage.data_dir.display(),
            perspectives_dir = %config.storage.perspectives_dir.display(),
            export_dir = %config.storage.export_dir.display(),
            "Wiring transfer collaborators"
        );

        Ok(Arc::new(Self::new(
            config.web.clone(),
            Arc::new(ZipExportService::new(
                config.storage.data_dir.clone(),
                config.storage.export_dir.clone(),
            )),
            Arc::new(LocalFileReader),
            Arc::new(FsPerspectiveCatalog::new(
                config.storage.perspectives_dir.clone(),
            )),
            Arc::new(StaticPermissionResolver::new(registry.clone())),
            Arc::new(StaticUserDirectory::new(registry)),
        )))
    }
}
