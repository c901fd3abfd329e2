//! Database helpers for question records.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

use super::types::Question;

/// Listing always returns the newest rows, never more than this many.
const LIST_LIMIT: i64 = 20;

pub(super) async fn list_recent(pool: &PgPool) -> Result<Vec<Question>> {
    let query = r"
        SELECT
            q.id, q.title, q.body, q.tags, q.user_id,
            q.vote_count, q.answer_count, q.view_count, q.created_at,
            u.username, u.email
        FROM questions q
        LEFT JOIN users u ON q.user_id = u.id
        ORDER BY q.created_at DESC
        LIMIT $1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    sqlx::query_as::<_, Question>(query)
        .bind(LIST_LIMIT)
        .fetch_all(pool)
        .instrument(span)
        .await
        .context("failed to list questions")
}

pub(super) async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Question>> {
    let query = r"
        SELECT
            q.id, q.title, q.body, q.tags, q.user_id,
            q.vote_count, q.answer_count, q.view_count, q.created_at,
            u.username, u.email
        FROM questions q
        LEFT JOIN users u ON q.user_id = u.id
        WHERE q.id = $1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    sqlx::query_as::<_, Question>(query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to fetch question")
}

/// Insert a question and return the stored row. The author fields come back
/// null here; a later fetch resolves them through the join.
pub(super) async fn insert(
    pool: &PgPool,
    title: &str,
    body: &str,
    tags: &[String],
    user_id: Uuid,
) -> Result<Question> {
    let query = r"
        INSERT INTO questions (title, body, tags, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING
            id, title, body, tags, user_id,
            vote_count, answer_count, view_count, created_at,
            NULL::text AS username, NULL::text AS email
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    sqlx::query_as::<_, Question>(query)
        .bind(title)
        .bind(body)
        .bind(tags)
        .bind(user_id)
        .fetch_one(pool)
        .instrument(span)
        .await
        .context("failed to insert question")
}
