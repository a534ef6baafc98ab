//! JSON flat-file document backend.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DocumentBackend, ShootDocument};
use crate::error::TrackerError;

/// Stores the whole document in a single JSON file.
///
/// Every write serializes the complete document to a sibling `.tmp` file
/// and renames it over the target, so readers see either the old or the
/// new document and never a torn one. Mutations inside this process are
/// serialized by `write_lock`; other processes writing the same file are
/// not coordinated with.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`. The file is created on
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. A missing, empty, unreadable or unparsable file
    /// yields an empty document; the last two are logged.
    async fn read_document(&self) -> ShootDocument {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return ShootDocument::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read data file, using empty document");
                return ShootDocument::default();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ShootDocument::default();
        }

        match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot parse data file, using empty document");
                ShootDocument::default()
            }
        }
    }

    async fn write_document(&self, document: &ShootDocument) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                TrackerError::PersistenceError(format!("create {}: {e}", parent.display()))
            })?;
        }

        let content = serde_json::to_vec_pretty(document)
            .map_err(|e| TrackerError::PersistenceError(format!("serialize document: {e}")))?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, content).await.map_err(|e| {
            TrackerError::PersistenceError(format!("write {}: {e}", tmp.display()))
        })?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(TrackerError::PersistenceError(format!(
                "replace {}: {e}",
                self.path.display()
            )));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl DocumentBackend for JsonFileStore {
    async fn load(&self) -> Result<ShootDocument, TrackerError> {
        Ok(self.read_document().await)
    }

    async fn mutate<T, F>(&self, op: F) -> Result<Option<T>, TrackerError>
    where
        T: Send + 'static,
        F: FnOnce(&mut ShootDocument) -> Option<T> + Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await;
        let Some(outcome) = op(&mut document) else {
            return Ok(None);
        };
        self.write_document(&document).await?;
        Ok(Some(outcome))
    }
}
