use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use uuid::Uuid;

use infra::models::UserRow;

use crate::gql::domains::posts::Post;
use crate::gql::domains::profiles::Profile;
use crate::gql::error::GqlResultExt;
use crate::gql::loaders::{
    PostsByAuthorLoader, ProfileByUserLoader, SubscribedToLoader, SubscribersLoader,
};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            balance: row.balance,
        }
    }
}

#[ComplexObject]
impl User {
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        let loader = ctx.data::<DataLoader<ProfileByUserLoader>>()?;
        let row = loader.load_one(self.id).await.gql()?;
        Ok(row.map(Profile::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let loader = ctx.data::<DataLoader<PostsByAuthorLoader>>()?;
        let rows = loader.load_one(self.id).await.gql()?.unwrap_or_default();
        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Authors this user follows.
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let loader = ctx.data::<DataLoader<SubscribedToLoader>>()?;
        let rows = loader.load_one(self.id).await.gql()?.unwrap_or_default();
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Users following this user.
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let loader = ctx.data::<DataLoader<SubscribersLoader>>()?;
        let rows = loader.load_one(self.id).await.gql()?.unwrap_or_default();
        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub balance: f64,
}

#[derive(InputObject, Default)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

impl From<CreateUserInput> for infra::repos::CreateUserData {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            balance: input.balance,
        }
    }
}

impl From<ChangeUserInput> for infra::repos::UpdateUserData {
    fn from(input: ChangeUserInput) -> Self {
        Self {
            name: input.name,
            balance: input.balance,
        }
    }
}
