use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{MemberTypeId, ProfileRow};

#[derive(Debug, Clone)]
pub struct CreateProfileData {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, is_male, year_of_birth, user_id, member_type_id, created_at
        FROM profiles
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, is_male, year_of_birth, user_id, member_type_id, created_at
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_user_ids<'e>(
    executor: impl PgExecutor<'e>,
    user_ids: &[Uuid],
) -> SqlxResult<Vec<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, is_male, year_of_birth, user_id, member_type_id, created_at
        FROM profiles
        WHERE user_id = ANY($1::uuid[])
        "#,
    )
    .bind(user_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateProfileData,
) -> SqlxResult<ProfileRow> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, is_male, year_of_birth, user_id, member_type_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, is_male, year_of_birth, user_id, member_type_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.is_male)
    .bind(data.year_of_birth)
    .bind(data.user_id)
    .bind(data.member_type_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateProfileData,
) -> SqlxResult<Option<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE profiles
        SET is_male = COALESCE($2, is_male),
            year_of_birth = COALESCE($3, year_of_birth),
            member_type_id = COALESCE($4, member_type_id)
        WHERE id = $1
        RETURNING id, is_male, year_of_birth, user_id, member_type_id, created_at
        "#,
    )
    .bind(id)
    .bind(data.is_male)
    .bind(data.year_of_birth)
    .bind(data.member_type_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
