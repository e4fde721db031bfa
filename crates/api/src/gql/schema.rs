use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{
    MemberTypeLoader, PostsByAuthorLoader, ProfileByUserLoader, SubscribedToLoader,
    SubscribersLoader,
};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    let store = state.store.clone();
    let member_type_loader = DataLoader::new(MemberTypeLoader::new(store.clone()), tokio::spawn);
    let profile_loader = DataLoader::new(ProfileByUserLoader::new(store.clone()), tokio::spawn);
    let posts_loader = DataLoader::new(PostsByAuthorLoader::new(store.clone()), tokio::spawn);
    let subscribed_to_loader = DataLoader::new(SubscribedToLoader::new(store.clone()), tokio::spawn);
    let subscribers_loader = DataLoader::new(SubscribersLoader::new(store), tokio::spawn);

    let introspection_enabled = state.config().introspection_enabled;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(member_type_loader)
    .data(profile_loader)
    .data(posts_loader)
    .data(subscribed_to_loader)
    .data(subscribers_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
