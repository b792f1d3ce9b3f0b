use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ProfileAction;

/// Whether a decision has already been recorded for the ordered pair.
pub async fn exists(
    pool: &PgPool,
    profile_id: Uuid,
    target_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(
             SELECT 1 FROM profile_actions WHERE profile_id = $1 AND target_id = $2
         )",
    )
    .bind(profile_id)
    .bind(target_id)
    .fetch_one(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    profile_id: Uuid,
    target_id: Uuid,
    action: &str,
) -> Result<ProfileAction, sqlx::Error> {
    sqlx::query_as::<_, ProfileAction>(
        "INSERT INTO profile_actions (profile_id, target_id, action)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(profile_id)
    .bind(target_id)
    .bind(action)
    .fetch_one(pool)
    .await
}
