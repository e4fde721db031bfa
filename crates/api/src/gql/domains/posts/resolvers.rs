use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlResultExt;
use crate::state::AppState;

use super::types::{ChangePostInput, CreatePostInput, Post};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_posts().await.gql()?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Post>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_post(id).await.gql()?;
        Ok(row.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(&self, ctx: &Context<'_>, dto: CreatePostInput) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let row = state.store.create_post(dto.into()).await.gql()?;
        tracing::info!(post_id = %row.id, author_id = %row.author_id, "Post created");

        Ok(row.into())
    }

    async fn change_post(&self, ctx: &Context<'_>, id: Uuid, dto: ChangePostInput) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let row = state.store.update_post(id, dto.into()).await.gql()?;
        tracing::debug!(post_id = %id, "Post updated");

        Ok(row.into())
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: Uuid) -> Result<String> {
        let state = ctx.data::<AppState>()?;

        state.store.delete_post(id).await.gql()?;
        tracing::info!(post_id = %id, "Post deleted");

        Ok(format!("Post {id} deleted"))
    }
}
