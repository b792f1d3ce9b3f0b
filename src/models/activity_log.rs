use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of a persona decision and its rationale.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub persona_id: Uuid,
    pub target_id: Uuid,
    pub activity_type: String,
    pub decision_reason: Option<String>,
    pub llm_model: Option<String>,
    pub created_at: DateTime<Utc>,
}
