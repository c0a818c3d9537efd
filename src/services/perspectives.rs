//! # Filesystem Perspective Catalog
//!
//! Stores one `{name}.json` layout document per perspective. Listing returns
//! the sorted file stems; retrieval deserializes the document.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::models::LayoutTemplate;
use crate::services::PerspectiveCatalog;

pub struct FsPerspectiveCatalog {
    perspectives_dir: PathBuf,
}

impl FsPerspectiveCatalog {
    pub fn new(perspectives_dir: impl Into<PathBuf>) -> Self {
        Self {
            perspectives_dir: perspectives_dir.into(),
        }
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.perspectives_dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl PerspectiveCatalog for FsPerspectiveCatalog {
    async fn list_layout_template_names(&self) -> ServiceResult<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.perspectives_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        // Sorted stems are the catalog's stable listing order
        names.sort();
        debug!(count = names.len(), "Listed layout templates");
        Ok(names)
    }

    async fn get_layout_template(&self, name: &str) -> ServiceResult<LayoutTemplate> {
        let path = self.document_path(name);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ServiceError::PerspectiveNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&raw)?)
    }
}
