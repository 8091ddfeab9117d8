use uuid::Uuid;

use crate::account::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone)]
pub enum PublishPageError {
    /// Publishing requires a claimed custom username first.
    UsernameRequired,
    UserNotFound,
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    pub username: String,
    /// False when the page was already live and no write happened.
    pub newly_published: bool,
}

#[async_trait::async_trait]
pub trait IPublishPageUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublishOutcome, PublishPageError>;
}

#[derive(Debug, Clone)]
pub struct PublishPageUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> PublishPageUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IPublishPageUseCase for PublishPageUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublishOutcome, PublishPageError> {
        let profile = self
            .repository
            .fetch_profile(user_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(PublishPageError::UserNotFound)?;

        if !profile.has_custom_username {
            return Err(PublishPageError::UsernameRequired);
        }

        if profile.is_published {
            return Ok(PublishOutcome {
                username: profile.username,
                newly_published: false,
            });
        }

        self.repository
            .set_published(user_id)
            .await
            .map_err(map_repo_error)?;

        Ok(PublishOutcome {
            username: profile.username,
            newly_published: true,
        })
    }
}

fn map_repo_error(err: ProfileRepositoryError) -> PublishPageError {
    match err {
        ProfileRepositoryError::UserNotFound => PublishPageError::UserNotFound,
        ProfileRepositoryError::DatabaseError(msg) => PublishPageError::RepositoryError(msg),
        _ => PublishPageError::RepositoryError("Unknown repository error".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::domain::entities::Profile;
    use crate::account::application::ports::outgoing::PatchProfileData;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockProfileRepository {
        profile: Option<Profile>,
        publish_calls: AtomicUsize,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn fetch_profile(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(self.profile.clone())
        }

        async fn update_profile(
            &self,
            _user_id: Uuid,
            _data: PatchProfileData,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!("Update is not used in PublishPage tests")
        }

        async fn set_username(
            &self,
            _user_id: Uuid,
            _username: &str,
        ) -> Result<(), ProfileRepositoryError> {
            unimplemented!("Claim is not used in PublishPage tests")
        }

        async fn set_published(&self, _user_id: Uuid) -> Result<(), ProfileRepositoryError> {
            self.publish_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn profile(id: Uuid, claimed: bool, published: bool) -> Profile {
        Profile {
            id,
            email: "john@example.com".to_string(),
            username: if claimed {
                "johndoe".to_string()
            } else {
                "willow4821".to_string()
            },
            display_name: "John Doe".to_string(),
            bio: None,
            image_path: None,
            background_path: None,
            has_custom_username: claimed,
            is_published: published,
            is_premium: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn publish_succeeds_with_claimed_username() {
        let user_id = Uuid::new_v4();
        let repo = MockProfileRepository {
            profile: Some(profile(user_id, true, false)),
            publish_calls: AtomicUsize::new(0),
        };

        let use_case = PublishPageUseCase::new(repo);
        let outcome = use_case.execute(user_id).await.unwrap();

        assert_eq!(outcome.username, "johndoe");
        assert!(outcome.newly_published);
    }

    #[tokio::test]
    async fn publish_without_claim_is_rejected() {
        let user_id = Uuid::new_v4();
        let repo = MockProfileRepository {
            profile: Some(profile(user_id, false, false)),
            publish_calls: AtomicUsize::new(0),
        };

        let use_case = PublishPageUseCase::new(repo);
        let result = use_case.execute(user_id).await;

        match result {
            Err(PublishPageError::UsernameRequired) => (),
            other => panic!("Expected UsernameRequired, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn republish_is_idempotent_and_skips_the_write() {
        let user_id = Uuid::new_v4();
        let repo = MockProfileRepository {
            profile: Some(profile(user_id, true, true)),
            publish_calls: AtomicUsize::new(0),
        };

        let use_case = PublishPageUseCase::new(repo);
        let outcome = use_case.execute(user_id).await.unwrap();

        assert!(!outcome.newly_published);
        assert_eq!(
            use_case.repository.publish_calls.load(Ordering::SeqCst),
            0
        );
    }
}
