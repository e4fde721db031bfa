use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, serde::Serialize, serde::Deserialize,
)]
#[sqlx(type_name = "member_type_id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "BASIC",
            MemberTypeId::Business => "BUSINESS",
        }
    }
}

impl FromStr for MemberTypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASIC" => Ok(MemberTypeId::Basic),
            "BUSINESS" => Ok(MemberTypeId::Business),
            _ => Err(format!("Unknown member type id: {}", s)),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MemberTypeRow {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SubscriptionRow {
    pub subscriber_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A user reached through a subscription edge, tagged with the id of the
/// user on the other end of that edge.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LinkedUserRow {
    pub link_id: Uuid,
    #[sqlx(flatten)]
    pub user: UserRow,
}
