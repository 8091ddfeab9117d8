use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use crate::upload::application::ports::outgoing::{FileStore, FileStoreError};

/// Writes blobs under a configured directory with uuid file names.
#[derive(Clone, Debug)]
pub struct LocalDiskStore {
    base_dir: PathBuf,
}

impl LocalDiskStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl FileStore for LocalDiskStore {
    async fn save(&self, data: &[u8], extension: &str) -> Result<String, FileStoreError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| FileStoreError::IoError(e.to_string()))?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.base_dir.join(&file_name);

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| FileStoreError::IoError(e.to_string()))?;

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saved_file_lands_on_disk_with_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path().join("uploads"));

        let path = store.save(b"content", "png").await.unwrap();

        assert!(path.ends_with(".png"));
        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"content");
    }
}
