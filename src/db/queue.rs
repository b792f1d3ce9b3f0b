use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ActionStatus, ActionType, QueueAction};

pub async fn enqueue(
    pool: &PgPool,
    persona_id: Uuid,
    target_id: Uuid,
    action_type: ActionType,
    scheduled_at: DateTime<Utc>,
    payload: serde_json::Value,
) -> Result<QueueAction, sqlx::Error> {
    sqlx::query_as::<_, QueueAction>(
        "INSERT INTO action_queue (persona_id, target_id, action_type, scheduled_at, payload)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(persona_id)
    .bind(target_id)
    .bind(action_type.as_str())
    .bind(scheduled_at)
    .bind(payload)
    .fetch_one(pool)
    .await
}

/// Fetch due pending actions, oldest first.
pub async fn fetch_due(
    pool: &PgPool,
    now: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<QueueAction>, sqlx::Error> {
    sqlx::query_as::<_, QueueAction>(
        "SELECT * FROM action_queue
         WHERE status = 'pending' AND scheduled_at <= $1
         ORDER BY scheduled_at ASC
         LIMIT $2",
    )
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Claim an action before execution. Plain update by id: the dispatcher is
/// single-instance, so no conditional check against concurrent claimants.
pub async fn mark_processing(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE action_queue SET status = $2, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(ActionStatus::Processing.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn mark_completed(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE action_queue
         SET status = $2, executed_at = now(), updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(ActionStatus::Completed.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

/// Put a failed action back in the queue for a later attempt.
pub async fn mark_retry(
    pool: &PgPool,
    id: Uuid,
    retry_count: i32,
    scheduled_at: DateTime<Utc>,
    error: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE action_queue
         SET status = $2, retry_count = $3, scheduled_at = $4,
             error_message = $5, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(ActionStatus::Pending.as_str())
    .bind(retry_count)
    .bind(scheduled_at)
    .bind(error)
    .execute(pool)
    .await?;
    Ok(())
}

/// Terminal failure. `scheduled_at` is left untouched.
pub async fn mark_failed(
    pool: &PgPool,
    id: Uuid,
    retry_count: i32,
    error: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE action_queue
         SET status = $2, retry_count = $3, error_message = $4, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(ActionStatus::Failed.as_str())
    .bind(retry_count)
    .bind(error)
    .execute(pool)
    .await?;
    Ok(())
}

/// Record the decision on the queue row itself: merged into the payload and
/// mirrored in the llm columns for the reporting scripts.
pub async fn attach_outcome(
    pool: &PgPool,
    id: Uuid,
    decision: &str,
    reason: &str,
    model: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE action_queue
         SET payload = payload || jsonb_build_object('decision', $2::text, 'reason', $3::text),
             llm_model = $4, llm_response = $3, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(decision)
    .bind(reason)
    .bind(model)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<QueueAction>, sqlx::Error> {
    sqlx::query_as::<_, QueueAction>("SELECT * FROM action_queue WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
