use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of scheduled persona work. Rows are inserted by the platform
/// when a trigger event occurs and mutated only by the dispatcher.
///
/// `action_type` and `status` are kept as text here so a row carrying a tag
/// this build does not know fails on its own instead of poisoning the whole
/// fetched batch.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct QueueAction {
    pub id: Uuid,
    pub persona_id: Uuid,
    pub target_id: Uuid,
    pub action_type: String,
    pub status: String,
    pub scheduled_at: DateTime<Utc>,
    pub retry_count: i32,
    pub error_message: Option<String>,
    pub payload: serde_json::Value,
    pub llm_model: Option<String>,
    pub llm_response: Option<String>,
    pub executed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The closed set of action kinds the dispatcher knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    RespondToLike,
    SendChatMessage,
    ViewProfile,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::RespondToLike => "respond_to_like",
            ActionType::SendChatMessage => "send_chat_message",
            ActionType::ViewProfile => "view_profile",
        }
    }
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "respond_to_like" => Ok(ActionType::RespondToLike),
            "send_chat_message" => Ok(ActionType::SendChatMessage),
            "view_profile" => Ok(ActionType::ViewProfile),
            other => Err(UnknownActionType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct UnknownActionType(pub String);

impl std::fmt::Display for UnknownActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown action type: {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Pending => "pending",
            ActionStatus::Processing => "processing",
            ActionStatus::Completed => "completed",
            ActionStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_type_round_trips() {
        for ty in [
            ActionType::RespondToLike,
            ActionType::SendChatMessage,
            ActionType::ViewProfile,
        ] {
            assert_eq!(ty.as_str().parse::<ActionType>().unwrap(), ty);
        }
    }

    #[test]
    fn unknown_action_type_is_rejected() {
        let err = "foo".parse::<ActionType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown action type: foo");
    }
}
