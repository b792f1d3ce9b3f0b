use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ActivityLogEntry;

pub async fn create(
    pool: &PgPool,
    persona_id: Uuid,
    target_id: Uuid,
    activity_type: &str,
    decision_reason: &str,
    llm_model: &str,
) -> Result<ActivityLogEntry, sqlx::Error> {
    sqlx::query_as::<_, ActivityLogEntry>(
        "INSERT INTO activity_log (persona_id, target_id, activity_type, decision_reason, llm_model)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(persona_id)
    .bind(target_id)
    .bind(activity_type)
    .bind(decision_reason)
    .bind(llm_model)
    .fetch_one(pool)
    .await
}
