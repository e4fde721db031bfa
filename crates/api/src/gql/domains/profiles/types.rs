use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, ErrorExtensions, InputObject, Result, SimpleObject};
use uuid::Uuid;

use infra::models::ProfileRow;

use crate::gql::domains::member_types::{MemberType, MemberTypeId};
use crate::gql::error::{GqlError, GqlResultExt};
use crate::gql::loaders::MemberTypeLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            is_male: row.is_male,
            year_of_birth: row.year_of_birth,
            user_id: row.user_id,
            member_type_id: row.member_type_id.into(),
        }
    }
}

#[ComplexObject]
impl Profile {
    async fn member_type(&self, ctx: &Context<'_>) -> Result<MemberType> {
        let loader = ctx.data::<DataLoader<MemberTypeLoader>>()?;
        let id = infra::models::MemberTypeId::from(self.member_type_id);

        let row = loader.load_one(id).await.gql()?;
        row.map(MemberType::from).ok_or_else(|| {
            GqlError::NotFound(format!("Member type {} not found", id.as_str())).extend()
        })
    }
}

#[derive(InputObject)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

#[derive(InputObject, Default)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}

impl From<CreateProfileInput> for infra::repos::CreateProfileData {
    fn from(input: CreateProfileInput) -> Self {
        Self {
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            user_id: input.user_id,
            member_type_id: input.member_type_id.into(),
        }
    }
}

impl From<ChangeProfileInput> for infra::repos::UpdateProfileData {
    fn from(input: ChangeProfileInput) -> Self {
        Self {
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            member_type_id: input.member_type_id.map(Into::into),
        }
    }
}
