use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlResultExt;
use crate::state::AppState;

use super::types::{ChangeProfileInput, CreateProfileInput, Profile};

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_profiles().await.gql()?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Profile>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_profile(id).await.gql()?;
        Ok(row.map(Profile::from))
    }
}

#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    /// Fails with NOT_FOUND for an unknown user and CONFLICT when the user
    /// already has a profile.
    async fn create_profile(&self, ctx: &Context<'_>, dto: CreateProfileInput) -> Result<Profile> {
        let state = ctx.data::<AppState>()?;

        let row = state.store.create_profile(dto.into()).await.gql()?;
        tracing::info!(profile_id = %row.id, user_id = %row.user_id, "Profile created");

        Ok(row.into())
    }

    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        dto: ChangeProfileInput,
    ) -> Result<Profile> {
        let state = ctx.data::<AppState>()?;

        let row = state.store.update_profile(id, dto.into()).await.gql()?;
        tracing::debug!(profile_id = %id, "Profile updated");

        Ok(row.into())
    }

    async fn delete_profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<String> {
        let state = ctx.data::<AppState>()?;

        state.store.delete_profile(id).await.gql()?;
        tracing::info!(profile_id = %id, "Profile deleted");

        Ok(format!("Profile {id} deleted"))
    }
}
