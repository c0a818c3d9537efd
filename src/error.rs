//! # Collaborator Error Taxonomy
//!
//! Errors surfaced by the injected collaborator services. The web layer maps
//! these onto HTTP responses in `web::errors`; nothing here knows about HTTP.

use thiserror::Error;

/// Errors produced by collaborator services (export, catalog, permissions,
/// user directory, file access).
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive failure: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no such perspective: {0}")]
    PerspectiveNotFound(String),

    #[error("security registry failure: {0}")]
    Registry(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
