//! The query-and-mutate interface resolvers use to reach persisted data.
//!
//! Every method is a single round-trip against the backing store. Lookups by
//! primary key return `Ok(None)` on a miss; updates and deletes of a missing
//! row return [`StoreError::NotFound`](crate::StoreError::NotFound).

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{LinkedUserRow, MemberTypeId, MemberTypeRow, PostRow, ProfileRow, UserRow};
use crate::repos::{
    CreatePostData, CreateProfileData, CreateUserData, UpdatePostData, UpdateProfileData,
    UpdateUserData,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type DynStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;

    // Member types (read-only reference data)
    async fn list_member_types(&self) -> StoreResult<Vec<MemberTypeRow>>;
    async fn get_member_type(&self, id: MemberTypeId) -> StoreResult<Option<MemberTypeRow>>;
    async fn get_member_types(&self, ids: &[MemberTypeId]) -> StoreResult<Vec<MemberTypeRow>>;

    // Users
    async fn list_users(&self) -> StoreResult<Vec<UserRow>>;
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>>;
    async fn get_users(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>>;
    async fn create_user(&self, data: CreateUserData) -> StoreResult<UserRow>;
    async fn update_user(&self, id: Uuid, data: UpdateUserData) -> StoreResult<UserRow>;
    async fn delete_user(&self, id: Uuid) -> StoreResult<()>;

    // Profiles
    async fn list_profiles(&self) -> StoreResult<Vec<ProfileRow>>;
    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<ProfileRow>>;
    async fn profiles_by_user_ids(&self, user_ids: &[Uuid]) -> StoreResult<Vec<ProfileRow>>;
    async fn create_profile(&self, data: CreateProfileData) -> StoreResult<ProfileRow>;
    async fn update_profile(&self, id: Uuid, data: UpdateProfileData) -> StoreResult<ProfileRow>;
    async fn delete_profile(&self, id: Uuid) -> StoreResult<()>;

    // Posts
    async fn list_posts(&self) -> StoreResult<Vec<PostRow>>;
    async fn get_post(&self, id: Uuid) -> StoreResult<Option<PostRow>>;
    async fn posts_by_author_ids(&self, author_ids: &[Uuid]) -> StoreResult<Vec<PostRow>>;
    async fn create_post(&self, data: CreatePostData) -> StoreResult<PostRow>;
    async fn update_post(&self, id: Uuid, data: UpdatePostData) -> StoreResult<PostRow>;
    async fn delete_post(&self, id: Uuid) -> StoreResult<()>;

    // Subscription edges
    /// Atomically insert the `(subscriber, author)` edge. Fails with `NotFound`
    /// when either user is missing and `Conflict` when the edge exists.
    async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()>;
    async fn unsubscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()>;
    /// Authors followed by each subscriber, tagged with the subscriber id.
    async fn authors_of(&self, subscriber_ids: &[Uuid]) -> StoreResult<Vec<LinkedUserRow>>;
    /// Followers of each author, tagged with the author id.
    async fn subscribers_of(&self, author_ids: &[Uuid]) -> StoreResult<Vec<LinkedUserRow>>;
}
