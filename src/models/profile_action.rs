use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded like/pass decision from one profile toward another.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProfileAction {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub target_id: Uuid,
    pub action: String,
    pub created_at: DateTime<Utc>,
}
