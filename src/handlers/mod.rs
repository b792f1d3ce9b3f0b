pub mod respond_to_like;
pub mod send_chat_message;
pub mod view_profile;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{ActionType, QueueAction};

pub use respond_to_like::RespondToLikeHandler;
pub use send_chat_message::SendChatMessageHandler;
pub use view_profile::ViewProfileHandler;

/// How a handler failure should be treated by the retry state machine.
#[derive(Debug)]
pub enum HandlerError {
    /// Worth another attempt after the backoff delay.
    Retryable(String),
    /// Retrying cannot help; the action fails immediately.
    Permanent(String),
}

impl HandlerError {
    pub fn retryable(msg: impl Into<String>) -> Self {
        HandlerError::Retryable(msg.into())
    }

    pub fn permanent(msg: impl Into<String>) -> Self {
        HandlerError::Permanent(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            HandlerError::Retryable(msg) | HandlerError::Permanent(msg) => msg,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<sqlx::Error> for HandlerError {
    fn from(err: sqlx::Error) -> Self {
        HandlerError::Retryable(format!("database error: {err}"))
    }
}

pub struct HandlerContext<'a> {
    pub pool: &'a PgPool,
    pub action: &'a QueueAction,
}

#[async_trait]
pub trait ActionHandler: Send + Sync {
    fn action_type(&self) -> ActionType;
    async fn execute(&self, ctx: &HandlerContext<'_>) -> Result<(), HandlerError>;
}

pub struct HandlerRegistry {
    handlers: HashMap<ActionType, Arc<dyn ActionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) {
        self.handlers.insert(handler.action_type(), handler);
    }

    pub fn get(&self, action_type: ActionType) -> Option<&Arc<dyn ActionHandler>> {
        self.handlers.get(&action_type)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
