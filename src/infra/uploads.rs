//! Attachment storage on the local filesystem.
//!
//! Files are written under a single directory using their sanitized name.
//! Two uploads with the same name overwrite each other (last writer wins);
//! there is no locking around the directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// Where case attachments end up.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Write `bytes` under the already-sanitized `file_name`.
    async fn save(&self, file_name: &str, bytes: &[u8]) -> AppResult<()>;
}

/// Upload store writing into a fixed directory.
pub struct LocalUploadStore {
    dir: PathBuf,
}

impl LocalUploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> AppResult<()> {
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored attachment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_save_writes_into_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(tmp.path().join("uploads"));
        store.ensure_dir().await.unwrap();

        store.save("brief.pdf", b"%PDF-1.4").await.unwrap();

        let written = std::fs::read(tmp.path().join("uploads/brief.pdf")).unwrap();
        assert_eq!(written, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_same_name_last_writer_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(tmp.path());

        store.save("notes.txt", b"first").await.unwrap();
        store.save("notes.txt", b"second").await.unwrap();

        assert_eq!(std::fs::read(tmp.path().join("notes.txt")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_upload_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(tmp.path().join("never-created"));

        let result = store.save("brief.pdf", b"data").await;
        assert!(matches!(result, Err(AppError::Upload(_))));
    }
}
