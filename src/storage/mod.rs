//! Output persistence.
//!
//! Writes each city's geometry payload to `<output_dir>/<city>.json`. The output
//! directory is created on first use (single level, parents must exist) and is
//! then reused for every later write in the run.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use crate::config::OUTPUT_FILE_EXTENSION;
use crate::error_handling::{InfoType, ProcessingStats, WriteError};
use crate::geometry::GeometryPayload;

/// Destination for fetched payloads.
pub trait PayloadSink {
    /// Persists `payload` under `key`, returning where it was written.
    fn write_payload(
        &mut self,
        key: &str,
        payload: &GeometryPayload,
    ) -> impl Future<Output = Result<PathBuf, WriteError>>;
}

/// How the output directory came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// It was already there.
    Existing,
    /// This run created it.
    Created,
    /// It was missing at the check but present at the create.
    ///
    /// Something else created it in between; the directory is usable, so this
    /// is treated as success.
    CreatedConcurrently,
}

/// Writes payloads as files inside one output directory.
pub struct OutputWriter {
    dir: PathBuf,
    dir_ready: bool,
    stats: Arc<ProcessingStats>,
}

impl OutputWriter {
    /// Creates a writer for `dir`. Nothing touches the filesystem until the first write.
    pub fn new(dir: impl Into<PathBuf>, stats: Arc<ProcessingStats>) -> Self {
        Self {
            dir: dir.into(),
            dir_ready: false,
            stats,
        }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path a payload for `key` is written to.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{OUTPUT_FILE_EXTENSION}"))
    }

    /// Makes sure the output directory exists.
    ///
    /// Only the first successful call touches the filesystem; later calls
    /// return `Existing` immediately. A failed creation is retried by the next call.
    pub async fn ensure_directory(&mut self) -> Result<DirectoryState, WriteError> {
        if self.dir_ready {
            return Ok(DirectoryState::Existing);
        }

        let state = if matches!(tokio::fs::try_exists(&self.dir).await, Ok(true)) {
            DirectoryState::Existing
        } else {
            self.create_directory().await?
        };

        self.dir_ready = true;
        Ok(state)
    }

    /// Creates the output directory after the existence check came back negative.
    async fn create_directory(&self) -> Result<DirectoryState, WriteError> {
        match tokio::fs::create_dir(&self.dir).await {
            Ok(()) => {
                info!("Created output directory {}", self.dir.display());
                self.stats.increment_info(InfoType::DirectoryCreated);
                Ok(DirectoryState::Created)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(
                    "Output directory {} appeared before it could be created",
                    self.dir.display()
                );
                self.stats.increment_info(InfoType::DirectoryCreateRace);
                Ok(DirectoryState::CreatedConcurrently)
            }
            Err(source) => Err(WriteError::CreateDirectory {
                path: self.dir.clone(),
                source,
            }),
        }
    }
}

impl PayloadSink for OutputWriter {
    async fn write_payload(
        &mut self,
        key: &str,
        payload: &GeometryPayload,
    ) -> Result<PathBuf, WriteError> {
        self.ensure_directory().await?;

        let path = self.path_for(key);
        tokio::fs::write(&path, payload.as_bytes())
            .await
            .map_err(|source| WriteError::WriteFile {
                path: path.clone(),
                source,
            })?;
        debug!("Wrote {} bytes to {}", payload.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(dir: &Path) -> OutputWriter {
        OutputWriter::new(dir, Arc::new(ProcessingStats::new()))
    }

    #[tokio::test]
    async fn test_directory_is_created_once() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("geoJSON");
        let stats = Arc::new(ProcessingStats::new());
        let mut writer = OutputWriter::new(&out, Arc::clone(&stats));

        writer
            .write_payload("Paris", &GeometryPayload::from("{}"))
            .await
            .unwrap();
        writer
            .write_payload("Berlin", &GeometryPayload::from("{}"))
            .await
            .unwrap();

        assert!(out.is_dir());
        assert_eq!(stats.get_info_count(InfoType::DirectoryCreated), 1);
        assert_eq!(stats.get_info_count(InfoType::DirectoryCreateRace), 0);
    }

    #[tokio::test]
    async fn test_existing_directory_is_reused() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = writer(root.path());
        assert_eq!(
            writer.ensure_directory().await.unwrap(),
            DirectoryState::Existing
        );
    }

    #[tokio::test]
    async fn test_directory_created_between_check_and_create_is_benign() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("geoJSON");
        let stats = Arc::new(ProcessingStats::new());
        let writer = OutputWriter::new(&out, Arc::clone(&stats));

        // The existence check saw nothing, then another actor created the directory.
        std::fs::create_dir(&out).unwrap();

        assert_eq!(
            writer.create_directory().await.unwrap(),
            DirectoryState::CreatedConcurrently
        );
        assert_eq!(stats.get_info_count(InfoType::DirectoryCreateRace), 1);
        assert_eq!(stats.get_info_count(InfoType::DirectoryCreated), 0);
    }

    #[tokio::test]
    async fn test_missing_parent_is_a_create_error() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = writer(&root.path().join("a").join("b"));

        let err = writer
            .write_payload("Paris", &GeometryPayload::from("{}"))
            .await
            .unwrap_err();
        assert!(matches!(err, WriteError::CreateDirectory { .. }));
    }

    #[tokio::test]
    async fn test_write_overwrites_and_keeps_bytes() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = writer(root.path());
        let body = b"\xef\xbb\xbf{\"type\":\"Polygon\"}\n";

        writer
            .write_payload("Paris", &GeometryPayload::from("old contents that are longer"))
            .await
            .unwrap();
        let path = writer
            .write_payload("Paris", &GeometryPayload::new(body.to_vec()))
            .await
            .unwrap();

        assert_eq!(path, root.path().join("Paris.json"));
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_key_with_separator_fails_without_poisoning_writer() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = writer(root.path());

        let err = writer
            .write_payload("nowhere/Paris", &GeometryPayload::from("{}"))
            .await
            .unwrap_err();
        assert!(matches!(err, WriteError::WriteFile { .. }));

        writer
            .write_payload("Paris", &GeometryPayload::from("{}"))
            .await
            .unwrap();
        assert!(root.path().join("Paris.json").is_file());
    }
}
