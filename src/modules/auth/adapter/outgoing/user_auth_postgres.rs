use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    RuntimeErr, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserAuthPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserAuthPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

// Postgres reports unique violations as SqlxError with the constraint name;
// that is the only way to tell an email conflict from a username conflict.
fn map_unique_violation(err: DbErr) -> UserRepositoryError {
    if let DbErr::Query(RuntimeErr::SqlxError(ref sqlx_err)) = err {
        let msg = sqlx_err.to_string();
        if msg.contains("users_email_key") {
            return UserRepositoryError::EmailTaken;
        }
        if msg.contains("users_username_key") || msg.contains("idx_users_username_lower") {
            return UserRepositoryError::UsernameTaken;
        }
    }
    UserRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl UserRepository for UserAuthPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            display_name: Set(data.display_name),
            username: Set(data.username),
            has_custom_username: Set(false),
            is_published: Set(false),
            is_admin: Set(false),
            is_banned: Set(false),
            is_premium: Set(false),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_unique_violation)?;

        Ok(inserted.into_domain())
    }
}

#[async_trait]
impl UserQuery for UserAuthPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.into_domain()))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.into_domain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_user_model(email: &str, username: &str) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            display_name: "Person".to_string(),
            username: username.to_string(),
            bio: None,
            image_path: None,
            background_path: None,
            has_custom_username: false,
            is_published: false,
            is_admin: false,
            is_banned: false,
            ban_reason: None,
            is_premium: false,
            plan_type: None,
            premium_expires_at: None,
            subscription_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_user_returns_inserted_row() {
        let model = test_user_model("a@b.com", "willow1234");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = UserAuthPostgres::new(Arc::new(db));

        let result = repo
            .create_user(CreateUserData {
                email: "a@b.com".to_string(),
                password_hash: "hash".to_string(),
                display_name: "Person".to_string(),
                username: "willow1234".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.email, "a@b.com");
        assert_eq!(result.username, "willow1234");
        assert!(!result.has_custom_username);
    }

    #[tokio::test]
    async fn find_by_email_maps_model() {
        let model = test_user_model("a@b.com", "willow1234");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = UserAuthPostgres::new(Arc::new(db));

        let found = repo.find_by_email("a@b.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "willow1234");
    }

    #[tokio::test]
    async fn find_by_id_missing_user_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repo = UserAuthPostgres::new(Arc::new(db));

        let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }
}
