use async_graphql::{Context, Object, Result};

use super::types::{MemberType, MemberTypeId};
use crate::gql::error::GqlResultExt;
use crate::state::AppState;

#[derive(Default)]
pub struct MemberTypeQuery;

#[Object]
impl MemberTypeQuery {
    async fn member_types(&self, ctx: &Context<'_>) -> Result<Vec<MemberType>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_member_types().await.gql()?;
        Ok(rows.into_iter().map(MemberType::from).collect())
    }

    /// Null when no member type has this id.
    async fn member_type(&self, ctx: &Context<'_>, id: MemberTypeId) -> Result<Option<MemberType>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_member_type(id.into()).await.gql()?;
        Ok(row.map(MemberType::from))
    }
}
