//! Upload storage behind a trait so handlers never touch the
//! filesystem directly.
//!
//! Stored paths are relative to the store root; that relative string is
//! what goes in the database.

use std::path::PathBuf;

use async_trait::async_trait;

/// Errors from media storage.
#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Byte-level storage for uploaded media.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `bytes` under `subdir/filename`, returning the stored
    /// (root-relative) path.
    async fn save(
        &self,
        subdir: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStoreError>;

    /// Read back a previously stored path.
    async fn load(&self, path: &str) -> Result<Vec<u8>, MediaStoreError>;
}

/// Filesystem-backed store rooted at a configured directory.
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(
        &self,
        subdir: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStoreError> {
        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(filename), bytes).await?;
        Ok(format!("{subdir}/{filename}"))
    }

    async fn load(&self, path: &str) -> Result<Vec<u8>, MediaStoreError> {
        Ok(tokio::fs::read(self.root.join(path)).await?)
    }
}
