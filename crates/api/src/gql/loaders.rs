//! Batch loaders behind every relationship field.
//!
//! Sibling parents resolved in the same tick share one store call per loader.
//! Loaders are built with `DataLoader::new` (no cache), so nothing outlives
//! the batch that requested it.

use async_graphql::dataloader::Loader;
use infra::models::{LinkedUserRow, MemberTypeId, MemberTypeRow, PostRow, ProfileRow};
use infra::{DynStore, StoreError};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

fn group_linked(rows: Vec<LinkedUserRow>) -> HashMap<Uuid, Vec<infra::models::UserRow>> {
    let mut grouped: HashMap<Uuid, Vec<_>> = HashMap::new();
    for row in rows {
        grouped.entry(row.link_id).or_default().push(row.user);
    }
    grouped
}

// MemberTypeLoader - batch load member types by id
#[derive(Clone)]
pub struct MemberTypeLoader {
    store: DynStore,
}

impl MemberTypeLoader {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

impl Loader<MemberTypeId> for MemberTypeLoader {
    type Value = MemberTypeRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[MemberTypeId],
    ) -> impl Future<Output = std::result::Result<HashMap<MemberTypeId, Self::Value>, Self::Error>>
           + Send {
        let store = self.store.clone();
        let ids: Vec<MemberTypeId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.get_member_types(&ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// ProfileByUserLoader - batch load the profile owned by each user
#[derive(Clone)]
pub struct ProfileByUserLoader {
    store: DynStore,
}

impl ProfileByUserLoader {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for ProfileByUserLoader {
    type Value = ProfileRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let user_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if user_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store
                .profiles_by_user_ids(&user_ids)
                .await
                .map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.user_id, r)).collect())
        }
    }
}

// PostsByAuthorLoader - batch load posts grouped by author
#[derive(Clone)]
pub struct PostsByAuthorLoader {
    store: DynStore,
}

impl PostsByAuthorLoader {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for PostsByAuthorLoader {
    type Value = Vec<PostRow>;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let author_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store
                .posts_by_author_ids(&author_ids)
                .await
                .map_err(Arc::new)?;

            let mut grouped: HashMap<Uuid, Vec<PostRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.author_id).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}

// SubscribedToLoader - authors each user follows
#[derive(Clone)]
pub struct SubscribedToLoader {
    store: DynStore,
}

impl SubscribedToLoader {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for SubscribedToLoader {
    type Value = Vec<infra::models::UserRow>;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let subscriber_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if subscriber_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.authors_of(&subscriber_ids).await.map_err(Arc::new)?;
            Ok(group_linked(rows))
        }
    }
}

// SubscribersLoader - users following each author
#[derive(Clone)]
pub struct SubscribersLoader {
    store: DynStore,
}

impl SubscribersLoader {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for SubscribersLoader {
    type Value = Vec<infra::models::UserRow>;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let author_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.subscribers_of(&author_ids).await.map_err(Arc::new)?;
            Ok(group_linked(rows))
        }
    }
}
