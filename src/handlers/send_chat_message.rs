use async_trait::async_trait;

use crate::models::ActionType;

use super::{ActionHandler, HandlerContext, HandlerError};

/// Placeholder: chat replies are not generated yet. Reports success so the
/// queue row completes instead of burning its retry budget.
pub struct SendChatMessageHandler;

#[async_trait]
impl ActionHandler for SendChatMessageHandler {
    fn action_type(&self) -> ActionType {
        ActionType::SendChatMessage
    }

    async fn execute(&self, ctx: &HandlerContext<'_>) -> Result<(), HandlerError> {
        tracing::info!(id = %ctx.action.id, "send_chat_message not implemented, completing as no-op");
        Ok(())
    }
}
