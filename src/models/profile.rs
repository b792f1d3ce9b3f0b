use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A platform profile, persona or real. Only the fields consumed for prompt
/// construction are modeled here.
///
/// `interests` and `personality_traits` are JSONB columns that legacy
/// writers sometimes filled with a JSON-encoded string instead of an array;
/// see `decision::prompt::normalize_string_list`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub nickname: String,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub bio: Option<String>,
    pub interests: serde_json::Value,
    pub personality_traits: serde_json::Value,
    pub location: Option<String>,
    pub job_category: Option<String>,
    pub is_persona: bool,
    pub created_at: DateTime<Utc>,
}
