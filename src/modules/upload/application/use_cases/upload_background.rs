use uuid::Uuid;

use crate::upload::application::domain::upload_policy::UploadPolicy;
use crate::upload::application::ports::outgoing::{
    BackgroundStore, BackgroundStoreError, FileStore,
};

#[derive(Debug, Clone)]
pub enum UploadBackgroundError {
    UnsupportedType,
    FileTooLarge,
    UserNotFound,
    StorageError(String),
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IUploadBackgroundUseCase: Send + Sync {
    /// Stores the blob under a fresh name and records the path on the
    /// user. Returns the stored path.
    async fn execute(
        &self,
        user_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, UploadBackgroundError>;
}

pub struct UploadBackgroundUseCase<F: FileStore, B: BackgroundStore> {
    policy: UploadPolicy,
    files: F,
    backgrounds: B,
}

impl<F: FileStore, B: BackgroundStore> UploadBackgroundUseCase<F, B> {
    pub fn new(policy: UploadPolicy, files: F, backgrounds: B) -> Self {
        Self {
            policy,
            files,
            backgrounds,
        }
    }
}

#[async_trait::async_trait]
impl<F, B> IUploadBackgroundUseCase for UploadBackgroundUseCase<F, B>
where
    F: FileStore + Send + Sync,
    B: BackgroundStore + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, UploadBackgroundError> {
        let limit = self
            .policy
            .limit_for(content_type)
            .ok_or(UploadBackgroundError::UnsupportedType)?;

        if data.len() as u64 > limit {
            return Err(UploadBackgroundError::FileTooLarge);
        }

        let extension = UploadPolicy::extension_for(content_type)
            .ok_or(UploadBackgroundError::UnsupportedType)?;

        let path = self
            .files
            .save(&data, extension)
            .await
            .map_err(|e| UploadBackgroundError::StorageError(e.to_string()))?;

        self.backgrounds
            .set_background(user_id, &path)
            .await
            .map_err(|e| match e {
                BackgroundStoreError::UserNotFound => UploadBackgroundError::UserNotFound,
                BackgroundStoreError::DatabaseError(msg) => {
                    UploadBackgroundError::RepositoryError(msg)
                }
            })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::application::ports::outgoing::FileStoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockFileStore {
        saved: Mutex<Vec<(usize, String)>>,
    }

    #[async_trait]
    impl FileStore for MockFileStore {
        async fn save(&self, data: &[u8], extension: &str) -> Result<String, FileStoreError> {
            self.saved
                .lock()
                .unwrap()
                .push((data.len(), extension.to_string()));
            Ok(format!("/uploads/test.{extension}"))
        }
    }

    struct MockBackgroundStore {
        paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl BackgroundStore for MockBackgroundStore {
        async fn set_background(
            &self,
            _user_id: Uuid,
            path: &str,
        ) -> Result<(), BackgroundStoreError> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    fn use_case() -> UploadBackgroundUseCase<MockFileStore, MockBackgroundStore> {
        UploadBackgroundUseCase::new(
            UploadPolicy::new("/tmp".to_string()),
            MockFileStore {
                saved: Mutex::new(Vec::new()),
            },
            MockBackgroundStore {
                paths: Mutex::new(Vec::new()),
            },
        )
    }

    #[tokio::test]
    async fn accepted_image_is_saved_and_recorded() {
        let use_case = use_case();

        let path = use_case
            .execute(Uuid::new_v4(), "image/png", vec![0u8; 1024])
            .await
            .unwrap();

        assert_eq!(path, "/uploads/test.png");
        assert_eq!(
            use_case.backgrounds.paths.lock().unwrap().as_slice(),
            &[path]
        );
    }

    #[tokio::test]
    async fn oversize_image_is_rejected_before_any_write() {
        let use_case = use_case();

        let result = use_case
            .execute(
                Uuid::new_v4(),
                "image/png",
                vec![0u8; 10 * 1024 * 1024 + 1],
            )
            .await;

        assert!(matches!(result, Err(UploadBackgroundError::FileTooLarge)));
        assert!(use_case.files.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn video_cap_is_larger_than_the_image_cap() {
        let use_case = use_case();

        let result = use_case
            .execute(
                Uuid::new_v4(),
                "video/mp4",
                vec![0u8; 10 * 1024 * 1024 + 1],
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_type_is_rejected() {
        let use_case = use_case();

        let result = use_case
            .execute(Uuid::new_v4(), "application/pdf", vec![0u8; 16])
            .await;

        assert!(matches!(result, Err(UploadBackgroundError::UnsupportedType)));
    }
}
