use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-persona behavioral configuration.
///
/// `response_rate` drives the fallback like-probability when inference is
/// unavailable. `chattiness` gates whether chat-response actions get
/// enqueued at all and is written by the platform side; no handler reads it
/// here. Delay bounds and active hours are likewise consumed at enqueue
/// time.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct PersonaSettings {
    pub persona_id: Uuid,
    pub response_rate: f64,
    pub chattiness: f64,
    pub min_response_delay_minutes: i32,
    pub max_response_delay_minutes: i32,
    pub active_hours_start: i32,
    pub active_hours_end: i32,
    pub llm_temperature: f64,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}
