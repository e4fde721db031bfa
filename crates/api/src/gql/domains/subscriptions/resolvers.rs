use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlResultExt;
use crate::state::AppState;

#[derive(Default)]
pub struct SubscriptionMutation;

#[Object]
impl SubscriptionMutation {
    /// Make `user_id` follow `author_id`.
    ///
    /// The edge is inserted atomically if absent. On failure the field is null
    /// and the error's `extensions.code` says why: NOT_FOUND when a user is
    /// missing, CONFLICT when the edge already exists.
    async fn subscribe_to(
        &self,
        ctx: &Context<'_>,
        user_id: Uuid,
        author_id: Uuid,
    ) -> Result<Option<String>> {
        let state = ctx.data::<AppState>()?;

        state.store.subscribe(user_id, author_id).await.gql()?;
        tracing::info!(subscriber_id = %user_id, author_id = %author_id, "Subscription created");

        Ok(Some("Subscribed successfully".to_string()))
    }

    /// Remove the edge; NOT_FOUND when it does not exist.
    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        user_id: Uuid,
        author_id: Uuid,
    ) -> Result<String> {
        let state = ctx.data::<AppState>()?;

        state.store.unsubscribe(user_id, author_id).await.gql()?;
        tracing::info!(subscriber_id = %user_id, author_id = %author_id, "Subscription removed");

        Ok("Unsubscribed successfully".to_string())
    }
}
