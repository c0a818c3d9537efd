//! Local filesystem file reader.

use async_trait::async_trait;
use std::path::Path;

use crate::error::ServiceResult;
use crate::services::FileReader;

/// Reads artifact bytes straight from the local filesystem.
#[derive(Debug, Default)]
pub struct LocalFileReader;

#[async_trait]
impl FileReader for LocalFileReader {
    async fn read_all_bytes(&self, path: &Path) -> ServiceResult<Vec<u8>> {
        Ok(tokio::fs::read(path).await?)
    }
}
