use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use super::Store;
use crate::error::{StoreError, StoreResult};
use crate::models::{
    LinkedUserRow, MemberTypeId, MemberTypeRow, PostRow, ProfileRow, SubscriptionRow, UserRow,
};
use crate::repos::{
    CreatePostData, CreateProfileData, CreateUserData, UpdatePostData, UpdateProfileData,
    UpdateUserData,
};

#[derive(Default)]
struct Tables {
    member_types: Vec<MemberTypeRow>,
    users: Vec<UserRow>,
    profiles: Vec<ProfileRow>,
    posts: Vec<PostRow>,
    subscriptions: Vec<SubscriptionRow>,
}

impl Tables {
    fn has_user(&self, id: Uuid) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn linked_users(
        &self,
        keys: &[Uuid],
        edge: impl Fn(&SubscriptionRow) -> (Uuid, Uuid),
    ) -> Vec<LinkedUserRow> {
        let keys: HashSet<&Uuid> = keys.iter().collect();
        self.subscriptions
            .iter()
            .map(&edge)
            .filter(|(link_id, _)| keys.contains(link_id))
            .filter_map(|(link_id, other)| {
                self.users
                    .iter()
                    .find(|u| u.id == other)
                    .map(|user| LinkedUserRow {
                        link_id,
                        user: user.clone(),
                    })
            })
            .collect()
    }
}

/// In-process [`Store`] holding every table behind one lock, so each call is
/// atomic. Rows keep insertion order. Mirrors the Postgres schema's
/// constraints: unique profile per user, cascading user deletes, and
/// foreign keys checked on insert.
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Empty store seeded with the BASIC and BUSINESS member types.
    pub fn new() -> Self {
        let tables = Tables {
            member_types: vec![
                MemberTypeRow {
                    id: MemberTypeId::Basic,
                    discount: 2.3,
                    posts_limit_per_month: 20,
                },
                MemberTypeRow {
                    id: MemberTypeId::Business,
                    discount: 7.7,
                    posts_limit_per_month: 100,
                },
            ],
            ..Tables::default()
        };

        Self {
            tables: Mutex::new(tables),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_member_types(&self) -> StoreResult<Vec<MemberTypeRow>> {
        Ok(self.tables.lock().member_types.clone())
    }

    async fn get_member_type(&self, id: MemberTypeId) -> StoreResult<Option<MemberTypeRow>> {
        let tables = self.tables.lock();
        Ok(tables.member_types.iter().find(|m| m.id == id).cloned())
    }

    async fn get_member_types(&self, ids: &[MemberTypeId]) -> StoreResult<Vec<MemberTypeRow>> {
        let tables = self.tables.lock();
        Ok(tables
            .member_types
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        Ok(self.tables.lock().users.clone())
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        let tables = self.tables.lock();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_users(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn create_user(&self, data: CreateUserData) -> StoreResult<UserRow> {
        let row = UserRow {
            id: Uuid::new_v4(),
            name: data.name,
            balance: data.balance,
            created_at: Utc::now(),
        };
        self.tables.lock().users.push(row.clone());
        Ok(row)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUserData) -> StoreResult<UserRow> {
        let mut tables = self.tables.lock();
        let row = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("User", id))?;

        if let Some(name) = data.name {
            row.name = name;
        }
        if let Some(balance) = data.balance {
            row.balance = balance;
        }
        Ok(row.clone())
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.lock();
        if !tables.has_user(id) {
            return Err(StoreError::not_found("User", id));
        }

        tables.users.retain(|u| u.id != id);
        tables.profiles.retain(|p| p.user_id != id);
        tables.posts.retain(|p| p.author_id != id);
        tables
            .subscriptions
            .retain(|s| s.subscriber_id != id && s.author_id != id);
        Ok(())
    }

    async fn list_profiles(&self) -> StoreResult<Vec<ProfileRow>> {
        Ok(self.tables.lock().profiles.clone())
    }

    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<ProfileRow>> {
        let tables = self.tables.lock();
        Ok(tables.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn profiles_by_user_ids(&self, user_ids: &[Uuid]) -> StoreResult<Vec<ProfileRow>> {
        let tables = self.tables.lock();
        Ok(tables
            .profiles
            .iter()
            .filter(|p| user_ids.contains(&p.user_id))
            .cloned()
            .collect())
    }

    async fn create_profile(&self, data: CreateProfileData) -> StoreResult<ProfileRow> {
        let mut tables = self.tables.lock();
        if !tables.has_user(data.user_id) {
            return Err(StoreError::not_found("User", data.user_id));
        }
        if tables.profiles.iter().any(|p| p.user_id == data.user_id) {
            return Err(StoreError::Conflict(format!(
                "User {} already has a profile",
                data.user_id
            )));
        }

        let row = ProfileRow {
            id: Uuid::new_v4(),
            is_male: data.is_male,
            year_of_birth: data.year_of_birth,
            user_id: data.user_id,
            member_type_id: data.member_type_id,
            created_at: Utc::now(),
        };
        tables.profiles.push(row.clone());
        Ok(row)
    }

    async fn update_profile(&self, id: Uuid, data: UpdateProfileData) -> StoreResult<ProfileRow> {
        let mut tables = self.tables.lock();
        let row = tables
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Profile", id))?;

        if let Some(is_male) = data.is_male {
            row.is_male = is_male;
        }
        if let Some(year_of_birth) = data.year_of_birth {
            row.year_of_birth = year_of_birth;
        }
        if let Some(member_type_id) = data.member_type_id {
            row.member_type_id = member_type_id;
        }
        Ok(row.clone())
    }

    async fn delete_profile(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.lock();
        let before = tables.profiles.len();
        tables.profiles.retain(|p| p.id != id);
        if tables.profiles.len() == before {
            return Err(StoreError::not_found("Profile", id));
        }
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostRow>> {
        Ok(self.tables.lock().posts.clone())
    }

    async fn get_post(&self, id: Uuid) -> StoreResult<Option<PostRow>> {
        let tables = self.tables.lock();
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn posts_by_author_ids(&self, author_ids: &[Uuid]) -> StoreResult<Vec<PostRow>> {
        let tables = self.tables.lock();
        Ok(tables
            .posts
            .iter()
            .filter(|p| author_ids.contains(&p.author_id))
            .cloned()
            .collect())
    }

    async fn create_post(&self, data: CreatePostData) -> StoreResult<PostRow> {
        let mut tables = self.tables.lock();
        if !tables.has_user(data.author_id) {
            return Err(StoreError::not_found("User", data.author_id));
        }

        let row = PostRow {
            id: Uuid::new_v4(),
            title: data.title,
            content: data.content,
            author_id: data.author_id,
            created_at: Utc::now(),
        };
        tables.posts.push(row.clone());
        Ok(row)
    }

    async fn update_post(&self, id: Uuid, data: UpdatePostData) -> StoreResult<PostRow> {
        let mut tables = self.tables.lock();
        let row = tables
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Post", id))?;

        if let Some(title) = data.title {
            row.title = title;
        }
        if let Some(content) = data.content {
            row.content = content;
        }
        Ok(row.clone())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.lock();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(StoreError::not_found("Post", id));
        }
        Ok(())
    }

    async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.lock();
        for id in [subscriber_id, author_id] {
            if !tables.has_user(id) {
                return Err(StoreError::not_found("User", id));
            }
        }
        if tables
            .subscriptions
            .iter()
            .any(|s| s.subscriber_id == subscriber_id && s.author_id == author_id)
        {
            return Err(StoreError::Conflict(format!(
                "User {subscriber_id} is already subscribed to {author_id}"
            )));
        }

        tables.subscriptions.push(SubscriptionRow {
            subscriber_id,
            author_id,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn unsubscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.lock();
        let before = tables.subscriptions.len();
        tables
            .subscriptions
            .retain(|s| !(s.subscriber_id == subscriber_id && s.author_id == author_id));
        if tables.subscriptions.len() == before {
            return Err(StoreError::not_found(
                "Subscription",
                format!("{subscriber_id} -> {author_id}"),
            ));
        }
        Ok(())
    }

    async fn authors_of(&self, subscriber_ids: &[Uuid]) -> StoreResult<Vec<LinkedUserRow>> {
        let tables = self.tables.lock();
        Ok(tables.linked_users(subscriber_ids, |s| (s.subscriber_id, s.author_id)))
    }

    async fn subscribers_of(&self, author_ids: &[Uuid]) -> StoreResult<Vec<LinkedUserRow>> {
        let tables = self.tables.lock();
        Ok(tables.linked_users(author_ids, |s| (s.author_id, s.subscriber_id)))
    }
}
