//! # Zip Export Service
//!
//! Serializes the application state directory into a timestamped zip artifact
//! in the export directory. One fresh artifact per call.

use async_trait::async_trait;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::{FileOptions, ZipWriter};

use crate::error::{ServiceError, ServiceResult};
use crate::models::DataTransferExportModel;
use crate::services::DataTransferServices;

/// Filesystem-backed export collaborator.
pub struct ZipExportService {
    data_dir: PathBuf,
    export_dir: PathBuf,
}

impl ZipExportService {
    pub fn new(data_dir: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            export_dir: export_dir.into(),
        }
    }

    /// Collect every regular file under `dir`, depth first, sorted for a
    /// deterministic archive layout.
    fn collect_files(dir: &Path) -> ServiceResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut stack = vec![dir.to_path_buf()];

        while let Some(current) = stack.pop() {
            let mut entries: Vec<_> = fs::read_dir(&current)?
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .map(|e| e.path())
                .collect();
            entries.sort();

            for path in entries {
                if path.is_dir() {
                    stack.push(path);
                } else {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Whether `rel` (path relative to the data dir) falls inside the scope
    /// selected by `model`.
    fn in_scope(rel: &Path, model: &DataTransferExportModel) -> bool {
        if model.export_all {
            return true;
        }

        let stem = rel
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        match rel.iter().next().and_then(|c| c.to_str()) {
            Some("perspectives") => model.pages.contains(&stem),
            Some("datasets") => model.datasets.contains(&stem),
            Some("navigation.json") => model.export_navigation,
            _ => false,
        }
    }

    /// Zip entry name: forward-slash joined relative path.
    fn entry_name(rel: &Path) -> String {
        rel.iter()
            .map(|c| c.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[async_trait]
impl DataTransferServices for ZipExportService {
    async fn do_export(&self, model: DataTransferExportModel) -> ServiceResult<PathBuf> {
        // The walk and the zip assembly are synchronous I/O; keep them off
        // the async executor
        let data_dir = self.data_dir.clone();
        let zip_data = tokio::task::spawn_blocking(move || -> ServiceResult<Vec<u8>> {
            let files = Self::collect_files(&data_dir)?;
            debug!(
                candidates = files.len(),
                export_all = model.export_all,
                "Assembling export archive"
            );

            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for path in &files {
                let rel = path
                    .strip_prefix(&data_dir)
                    .expect("collected file outside data dir");
                if !Self::in_scope(rel, &model) {
                    continue;
                }

                zip.start_file::<_, ()>(Self::entry_name(rel), FileOptions::default())?;
                zip.write_all(&fs::read(path)?)?;
            }

            Ok(zip.finish()?.into_inner())
        })
        .await
        .map_err(|e| ServiceError::Io(std::io::Error::other(e)))??;

        tokio::fs::create_dir_all(&self.export_dir).await?;

        // TODO: prune expired artifacts; every call leaves one behind
        let artifact = self
            .export_dir
            .join(format!("export_{}.zip", Utc::now().format("%Y%m%d_%H%M%S_%f")));
        tokio::fs::write(&artifact, &zip_data).await?;

        info!(
            artifact = %artifact.display(),
            bytes = zip_data.len(),
            "Export artifact written"
        );
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seed_data_dir(root: &Path) {
        fs::create_dir_all(root.join("perspectives")).unwrap();
        fs::create_dir_all(root.join("datasets")).unwrap();
        fs::write(root.join("perspectives/home.json"), b"{\"name\":\"home\"}").unwrap();
        fs::write(root.join("perspectives/sales.json"), b"{\"name\":\"sales\"}").unwrap();
        fs::write(root.join("datasets/orders.csv"), b"id,total\n").unwrap();
        fs::write(root.join("navigation.json"), b"{}").unwrap();
    }

    fn archive_names(artifact: &Path) -> HashSet<String> {
        let file = fs::File::open(artifact).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_export_all_includes_everything() {
        let dir = tempfile::tempdir().unwrap();
        seed_data_dir(dir.path());

        let service = ZipExportService::new(dir.path(), dir.path().join("exports"));
        let artifact = service
            .do_export(DataTransferExportModel::export_all())
            .await
            .unwrap();

        let names = archive_names(&artifact);
        assert!(names.contains("perspectives/home.json"));
        assert!(names.contains("perspectives/sales.json"));
        assert!(names.contains("datasets/orders.csv"));
        assert!(names.contains("navigation.json"));
    }

    #[tokio::test]
    async fn test_partial_export_honors_scope() {
        let dir = tempfile::tempdir().unwrap();
        seed_data_dir(dir.path());

        let service = ZipExportService::new(dir.path(), dir.path().join("exports"));
        let model =
            DataTransferExportModel::of(vec![], vec!["sales".to_string()], false);
        let artifact = service.do_export(model).await.unwrap();

        let names = archive_names(&artifact);
        assert_eq!(
            names,
            HashSet::from(["perspectives/sales.json".to_string()])
        );
    }

    #[tokio::test]
    async fn test_each_call_creates_fresh_artifact() {
        let dir = tempfile::tempdir().unwrap();
        seed_data_dir(dir.path());

        let service = ZipExportService::new(dir.path(), dir.path().join("exports"));
        let first = service
            .do_export(DataTransferExportModel::export_all())
            .await
            .unwrap();
        let second = service
            .do_export(DataTransferExportModel::export_all())
            .await
            .unwrap();

        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());
    }
}
