use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PostRow;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id, created_at
        FROM posts
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_author_ids<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[Uuid],
) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id, created_at
        FROM posts
        WHERE author_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePostData) -> SqlxResult<PostRow> {
    sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, title, content, author_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, content, author_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.author_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePostData,
) -> SqlxResult<Option<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET title = COALESCE($2, title),
            content = COALESCE($3, content)
        WHERE id = $1
        RETURNING id, title, content, author_id, created_at
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.content)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
