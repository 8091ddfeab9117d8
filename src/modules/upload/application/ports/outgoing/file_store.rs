use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("Storage error: {0}")]
    IoError(String),
}

/// Writes an uploaded blob and hands back the stored path.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn save(&self, data: &[u8], extension: &str) -> Result<String, FileStoreError>;
}
