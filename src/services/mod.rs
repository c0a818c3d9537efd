//! # Collaborator Services
//!
//! The trait seams the HTTP layer composes. Handlers depend only on these
//! traits; the filesystem-backed implementations in the submodules are wired
//! in at bootstrap and swapped for in-memory mocks in tests.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::ServiceResult;
use crate::models::{DataTransferExportModel, LayoutTemplate, PermissionSet, User};

pub mod export;
pub mod files;
pub mod perspectives;
pub mod security;

pub use export::ZipExportService;
pub use files::LocalFileReader;
pub use perspectives::FsPerspectiveCatalog;
pub use security::{SecurityRegistry, StaticPermissionResolver, StaticUserDirectory};

/// Produces export artifacts of the application state.
///
/// Every call creates a fresh artifact file; nothing here caches, dedupes, or
/// cleans up earlier artifacts.
#[async_trait]
pub trait DataTransferServices: Send + Sync {
    /// Serialize the state selected by `model` into an archive on disk and
    /// return the artifact's path.
    async fn do_export(&self, model: DataTransferExportModel) -> ServiceResult<PathBuf>;
}

/// Raw byte access to artifact files.
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_all_bytes(&self, path: &Path) -> ServiceResult<Vec<u8>>;
}

/// The store of named page layout templates.
#[async_trait]
pub trait PerspectiveCatalog: Send + Sync {
    /// All known template names, in the catalog's stable listing order.
    /// Each call takes a fresh snapshot.
    async fn list_layout_template_names(&self) -> ServiceResult<Vec<String>>;

    /// The layout document stored under `name`.
    async fn get_layout_template(&self, name: &str) -> ServiceResult<LayoutTemplate>;
}

/// Resolves a user's page read grants.
#[async_trait]
pub trait PermissionResolver: Send + Sync {
    /// The permission set for `username`. Unknown users resolve to the
    /// default-deny set rather than an error.
    async fn user_permissions(&self, username: &str) -> ServiceResult<PermissionSet>;
}

/// The user directory consulted before listing pages.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, username: &str) -> ServiceResult<Option<User>>;
}
