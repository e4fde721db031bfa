use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::LinkedUserRow;

/// Insert the edge unless it already exists. Returns `false` when the pair
/// was already present; a missing user surfaces as a foreign-key violation.
pub async fn insert_if_absent<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> SqlxResult<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO subscribers_on_authors (subscriber_id, author_id)
        VALUES ($1, $2)
        ON CONFLICT (subscriber_id, author_id) DO NOTHING
        "#,
    )
    .bind(subscriber_id)
    .bind(author_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> SqlxResult<bool> {
    let result = sqlx::query(
        "DELETE FROM subscribers_on_authors WHERE subscriber_id = $1 AND author_id = $2",
    )
    .bind(subscriber_id)
    .bind(author_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Authors followed by each of `subscriber_ids`; `link_id` is the subscriber.
pub async fn authors_of<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_ids: &[Uuid],
) -> SqlxResult<Vec<LinkedUserRow>> {
    sqlx::query_as::<_, LinkedUserRow>(
        r#"
        SELECT s.subscriber_id AS link_id, u.id, u.name, u.balance, u.created_at
        FROM subscribers_on_authors s
        JOIN users u ON u.id = s.author_id
        WHERE s.subscriber_id = ANY($1::uuid[])
        ORDER BY s.created_at ASC, u.id ASC
        "#,
    )
    .bind(subscriber_ids)
    .fetch_all(executor)
    .await
}

/// Followers of each of `author_ids`; `link_id` is the author.
pub async fn subscribers_of<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[Uuid],
) -> SqlxResult<Vec<LinkedUserRow>> {
    sqlx::query_as::<_, LinkedUserRow>(
        r#"
        SELECT s.author_id AS link_id, u.id, u.name, u.balance, u.created_at
        FROM subscribers_on_authors s
        JOIN users u ON u.id = s.subscriber_id
        WHERE s.author_id = ANY($1::uuid[])
        ORDER BY s.created_at ASC, u.id ASC
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await
}
