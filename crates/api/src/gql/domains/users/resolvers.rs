use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlResultExt;
use crate::state::AppState;

use super::types::{ChangeUserInput, CreateUserInput, User};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_users().await.gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Null when no user has this id. Profile, posts and subscriptions are
    /// resolved through the batch loaders like on any other `User`.
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_user(id).await.gql()?;
        Ok(row.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, dto: CreateUserInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let row = state.store.create_user(dto.into()).await.gql()?;
        tracing::info!(user_id = %row.id, "User created");

        Ok(row.into())
    }

    /// Partial update; omitted fields keep their current value.
    async fn change_user(&self, ctx: &Context<'_>, id: Uuid, dto: ChangeUserInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let row = state.store.update_user(id, dto.into()).await.gql()?;
        tracing::debug!(user_id = %id, "User updated");

        Ok(row.into())
    }

    /// Deletes the user along with their profile, posts and subscriptions.
    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<String> {
        let state = ctx.data::<AppState>()?;

        state.store.delete_user(id).await.gql()?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(format!("User {id} deleted"))
    }
}
