use async_graphql::{Enum, SimpleObject};

use infra::models::MemberTypeRow;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MemberTypeId {
    #[graphql(name = "BASIC")]
    Basic,
    #[graphql(name = "BUSINESS")]
    Business,
}

impl From<MemberTypeId> for infra::models::MemberTypeId {
    fn from(id: MemberTypeId) -> Self {
        match id {
            MemberTypeId::Basic => infra::models::MemberTypeId::Basic,
            MemberTypeId::Business => infra::models::MemberTypeId::Business,
        }
    }
}

impl From<infra::models::MemberTypeId> for MemberTypeId {
    fn from(id: infra::models::MemberTypeId) -> Self {
        match id {
            infra::models::MemberTypeId::Basic => MemberTypeId::Basic,
            infra::models::MemberTypeId::Business => MemberTypeId::Business,
        }
    }
}

/// Subscription tier: discount and monthly post quota.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Member")]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

impl From<MemberTypeRow> for MemberType {
    fn from(row: MemberTypeRow) -> Self {
        Self {
            id: row.id.into(),
            discount: row.discount,
            posts_limit_per_month: row.posts_limit_per_month,
        }
    }
}
