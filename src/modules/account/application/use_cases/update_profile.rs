use uuid::Uuid;

use crate::account::application::domain::entities::Profile;
use crate::account::application::ports::outgoing::{
    PatchProfileData, ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    UserNotFound,
    DisplayNameEmpty,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        data: PatchProfileData,
    ) -> Result<Profile, UpdateProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> UpdateProfileUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        data: PatchProfileData,
    ) -> Result<Profile, UpdateProfileError> {
        if let Some(name) = &data.display_name {
            if name.trim().is_empty() {
                return Err(UpdateProfileError::DisplayNameEmpty);
            }
        }

        self.repository
            .update_profile(user_id, data)
            .await
            .map_err(|err| match err {
                ProfileRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                ProfileRepositoryError::DatabaseError(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
                _ => UpdateProfileError::RepositoryError("Unknown repository error".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockProfileRepository {
        existing: Option<Profile>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn fetch_profile(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            unimplemented!("Fetch is not used in UpdateProfile tests")
        }

        async fn update_profile(
            &self,
            user_id: Uuid,
            data: PatchProfileData,
        ) -> Result<Profile, ProfileRepositoryError> {
            let existing = self
                .existing
                .clone()
                .filter(|p| p.id == user_id)
                .ok_or(ProfileRepositoryError::UserNotFound)?;

            Ok(Profile {
                display_name: data.display_name.unwrap_or(existing.display_name),
                bio: data.bio.or(existing.bio),
                image_path: data.image_path.or(existing.image_path),
                ..existing
            })
        }

        async fn set_username(
            &self,
            _user_id: Uuid,
            _username: &str,
        ) -> Result<(), ProfileRepositoryError> {
            unimplemented!("Claim is not used in UpdateProfile tests")
        }

        async fn set_published(&self, _user_id: Uuid) -> Result<(), ProfileRepositoryError> {
            unimplemented!("Publish is not used in UpdateProfile tests")
        }
    }

    fn sample_profile(id: Uuid) -> Profile {
        Profile {
            id,
            email: "john@example.com".to_string(),
            username: "willow4821".to_string(),
            display_name: "John Doe".to_string(),
            bio: None,
            image_path: None,
            background_path: None,
            has_custom_username: false,
            is_published: false,
            is_premium: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn partial_update_keeps_untouched_fields() {
        let user_id = Uuid::new_v4();
        let repo = MockProfileRepository {
            existing: Some(sample_profile(user_id)),
        };

        let use_case = UpdateProfileUseCase::new(repo);
        let result = use_case
            .execute(
                user_id,
                PatchProfileData {
                    bio: Some("New bio".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.bio.as_deref(), Some("New bio"));
        assert_eq!(updated.display_name, "John Doe");
    }

    #[tokio::test]
    async fn blank_display_name_is_rejected() {
        let user_id = Uuid::new_v4();
        let repo = MockProfileRepository {
            existing: Some(sample_profile(user_id)),
        };

        let use_case = UpdateProfileUseCase::new(repo);
        let result = use_case
            .execute(
                user_id,
                PatchProfileData {
                    display_name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(UpdateProfileError::DisplayNameEmpty) => (),
            other => panic!("Expected DisplayNameEmpty, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_user_maps_to_not_found() {
        let repo = MockProfileRepository { existing: None };

        let use_case = UpdateProfileUseCase::new(repo);
        let result = use_case
            .execute(
                Uuid::new_v4(),
                PatchProfileData {
                    display_name: Some("New Name".to_string()),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(UpdateProfileError::UserNotFound) => (),
            other => panic!("Expected UserNotFound, got {:?}", other),
        }
    }
}
