use async_trait::async_trait;
use uuid::Uuid;

use super::Store;
use crate::db::Db;
use crate::error::{StoreError, StoreResult};
use crate::models::{LinkedUserRow, MemberTypeId, MemberTypeRow, PostRow, ProfileRow, UserRow};
use crate::repos::{
    member_types, posts, profiles, subscriptions, users, CreatePostData, CreateProfileData,
    CreateUserData, UpdatePostData, UpdateProfileData, UpdateUserData,
};

/// [`Store`] backed by the Postgres pool.
#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &Db {
        &self.db
    }

    /// Name the user that made an edge insert trip its foreign key.
    async fn missing_party(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreError {
        match users::get_by_ids(&self.db, &[subscriber_id, author_id]).await {
            Ok(found) => {
                let missing = if found.iter().any(|u| u.id == subscriber_id) {
                    author_id
                } else {
                    subscriber_id
                };
                StoreError::not_found("User", missing)
            }
            Err(e) => e.into(),
        }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }

    async fn list_member_types(&self) -> StoreResult<Vec<MemberTypeRow>> {
        Ok(member_types::list(&self.db).await?)
    }

    async fn get_member_type(&self, id: MemberTypeId) -> StoreResult<Option<MemberTypeRow>> {
        Ok(member_types::get_by_id(&self.db, id).await?)
    }

    async fn get_member_types(&self, ids: &[MemberTypeId]) -> StoreResult<Vec<MemberTypeRow>> {
        Ok(member_types::get_by_ids(&self.db, ids).await?)
    }

    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        Ok(users::list(&self.db).await?)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(users::get_by_id(&self.db, id).await?)
    }

    async fn get_users(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        Ok(users::get_by_ids(&self.db, ids).await?)
    }

    async fn create_user(&self, data: CreateUserData) -> StoreResult<UserRow> {
        Ok(users::create(&self.db, data).await?)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUserData) -> StoreResult<UserRow> {
        users::update(&self.db, id, data)
            .await?
            .ok_or_else(|| StoreError::not_found("User", id))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        if users::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found("User", id))
        }
    }

    async fn list_profiles(&self) -> StoreResult<Vec<ProfileRow>> {
        Ok(profiles::list(&self.db).await?)
    }

    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<ProfileRow>> {
        Ok(profiles::get_by_id(&self.db, id).await?)
    }

    async fn profiles_by_user_ids(&self, user_ids: &[Uuid]) -> StoreResult<Vec<ProfileRow>> {
        Ok(profiles::list_by_user_ids(&self.db, user_ids).await?)
    }

    async fn create_profile(&self, data: CreateProfileData) -> StoreResult<ProfileRow> {
        let user_id = data.user_id;

        // Every MemberTypeId variant is seeded, so a dangling key is the user.
        profiles::create(&self.db, data).await.map_err(|e| {
            StoreError::from_write(
                e,
                || StoreError::not_found("User", user_id),
                || format!("User {user_id} already has a profile"),
            )
        })
    }

    async fn update_profile(&self, id: Uuid, data: UpdateProfileData) -> StoreResult<ProfileRow> {
        profiles::update(&self.db, id, data)
            .await?
            .ok_or_else(|| StoreError::not_found("Profile", id))
    }

    async fn delete_profile(&self, id: Uuid) -> StoreResult<()> {
        if profiles::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found("Profile", id))
        }
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostRow>> {
        Ok(posts::list(&self.db).await?)
    }

    async fn get_post(&self, id: Uuid) -> StoreResult<Option<PostRow>> {
        Ok(posts::get_by_id(&self.db, id).await?)
    }

    async fn posts_by_author_ids(&self, author_ids: &[Uuid]) -> StoreResult<Vec<PostRow>> {
        Ok(posts::list_by_author_ids(&self.db, author_ids).await?)
    }

    async fn create_post(&self, data: CreatePostData) -> StoreResult<PostRow> {
        let author_id = data.author_id;

        // Posts have no unique column besides the generated id, so the author
        // foreign key is the only constraint this insert trips in practice.
        // The conflict arm only covers a v4 id collision.
        posts::create(&self.db, data).await.map_err(|e| {
            StoreError::from_write(
                e,
                || StoreError::not_found("User", author_id),
                || "Generated post id collided with an existing post".to_string(),
            )
        })
    }

    async fn update_post(&self, id: Uuid, data: UpdatePostData) -> StoreResult<PostRow> {
        posts::update(&self.db, id, data)
            .await?
            .ok_or_else(|| StoreError::not_found("Post", id))
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        if posts::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found("Post", id))
        }
    }

    async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()> {
        match subscriptions::insert_if_absent(&self.db, subscriber_id, author_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(StoreError::Conflict(format!(
                "User {subscriber_id} is already subscribed to {author_id}"
            ))),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(self.missing_party(subscriber_id, author_id).await)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn unsubscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()> {
        if subscriptions::delete(&self.db, subscriber_id, author_id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found(
                "Subscription",
                format!("{subscriber_id} -> {author_id}"),
            ))
        }
    }

    async fn authors_of(&self, subscriber_ids: &[Uuid]) -> StoreResult<Vec<LinkedUserRow>> {
        Ok(subscriptions::authors_of(&self.db, subscriber_ids).await?)
    }

    async fn subscribers_of(&self, author_ids: &[Uuid]) -> StoreResult<Vec<LinkedUserRow>> {
        Ok(subscriptions::subscribers_of(&self.db, author_ids).await?)
    }
}
