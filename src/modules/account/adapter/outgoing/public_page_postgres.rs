use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::account::application::domain::entities::{PageLink, PublicPage};
use crate::account::application::ports::outgoing::{PublicPageQuery, PublicPageQueryError};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::content::adapter::outgoing::sea_orm_entity::bio_links::{
    Column as BioLinkColumn, Entity as BioLinkEntity,
};
use crate::content::adapter::outgoing::sea_orm_entity::social_links::{
    Column as SocialLinkColumn, Entity as SocialLinkEntity,
};

#[derive(Clone, Debug)]
pub struct PublicPagePostgres {
    db: Arc<DatabaseConnection>,
}

impl PublicPagePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PublicPageQuery for PublicPagePostgres {
    async fn find_published_page(
        &self,
        username: &str,
    ) -> Result<Option<PublicPage>, PublicPageQueryError> {
        let user = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(UserColumn::Username))).eq(username),
            )
            .filter(UserColumn::IsPublished.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| PublicPageQueryError::DatabaseError(e.to_string()))?;

        let user = match user {
            Some(u) => u,
            None => return Ok(None),
        };

        let links = BioLinkEntity::find()
            .filter(BioLinkColumn::UserId.eq(user.id))
            .order_by_asc(BioLinkColumn::Position)
            .all(&*self.db)
            .await
            .map_err(|e| PublicPageQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|m| PageLink {
                label: m.title,
                url: m.url,
                position: m.position,
            })
            .collect();

        let socials = SocialLinkEntity::find()
            .filter(SocialLinkColumn::UserId.eq(user.id))
            .order_by_asc(SocialLinkColumn::Position)
            .all(&*self.db)
            .await
            .map_err(|e| PublicPageQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|m| PageLink {
                label: m.platform,
                url: m.url,
                position: m.position,
            })
            .collect();

        Ok(Some(PublicPage {
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            image_path: user.image_path,
            background_path: user.background_path,
            links,
            socials,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use crate::content::adapter::outgoing::sea_orm_entity::bio_links::Model as BioLinkModel;
    use crate::content::adapter::outgoing::sea_orm_entity::social_links::Model as SocialLinkModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn published_user(id: Uuid) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            email: "a@b.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: "John Doe".to_string(),
            username: "johndoe".to_string(),
            bio: Some("Hello".to_string()),
            image_path: None,
            background_path: None,
            has_custom_username: true,
            is_published: true,
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
    async fn assembles_page_with_ordered_links() {
        let user_id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let link = BioLinkModel {
            id: Uuid::new_v4(),
            user_id,
            title: "My blog".to_string(),
            url: "https://blog.example.com".to_string(),
            position: 0,
            created_at: now,
            updated_at: now,
        };
        let social = SocialLinkModel {
            id: Uuid::new_v4(),
            user_id,
            platform: "twitter".to_string(),
            url: "https://twitter.com/johndoe".to_string(),
            position: 0,
            created_at: now,
            updated_at: now,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![published_user(user_id)]])
            .append_query_results(vec![vec![link]])
            .append_query_results(vec![vec![social]])
            .into_connection();

        let query = PublicPagePostgres::new(Arc::new(db));

        let page = query.find_published_page("johndoe").await.unwrap().unwrap();
        assert_eq!(page.display_name, "John Doe");
        assert_eq!(page.links[0].label, "My blog");
        assert_eq!(page.socials[0].label, "twitter");
    }

    #[tokio::test]
    async fn unpublished_or_unknown_user_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = PublicPagePostgres::new(Arc::new(db));

        let page = query.find_published_page("nobody").await.unwrap();
        assert!(page.is_none());
    }
}
