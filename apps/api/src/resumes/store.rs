//! Thin pass-through CRUD over the `resumes` table. No business logic lives
//! here; scoring happens in `analysis` and rows are scoped by `user_id`.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{ResumeRecord, ResumeRow};

pub async fn create_resume(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    record: &ResumeRecord,
) -> Result<ResumeRow> {
    let data = serde_json::to_value(record)?;
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, title, data)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(data)
    .fetch_one(pool)
    .await?;

    info!("Created resume {} for user {user_id}", row.id);
    Ok(row)
}

pub async fn get_resume(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<ResumeRow>> {
    Ok(sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

/// Returns all resumes for a user, newest first.
pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>> {
    Ok(sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Replaces the title and snapshot of an existing resume.
/// Returns `None` if no row matched.
pub async fn update_resume(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    title: &str,
    record: &ResumeRecord,
) -> Result<Option<ResumeRow>> {
    let data = serde_json::to_value(record)?;
    Ok(sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET title = $3, data = $4, updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(data)
    .fetch_optional(pool)
    .await?)
}

/// Deletes a resume. Returns whether a row was removed.
pub async fn delete_resume(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Persists the latest analysis score onto the row. The score is advisory
/// display state; the snapshot in `data` stays untouched.
pub async fn save_ats_score(pool: &PgPool, id: Uuid, user_id: Uuid, score: i32) -> Result<()> {
    sqlx::query("UPDATE resumes SET ats_score = $3 WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .bind(score)
        .execute(pool)
        .await?;
    Ok(())
}
