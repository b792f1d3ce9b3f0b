use async_trait::async_trait;

use crate::models::ActionType;

use super::{ActionHandler, HandlerContext, HandlerError};

/// Placeholder: profile-view simulation is not implemented yet.
pub struct ViewProfileHandler;

#[async_trait]
impl ActionHandler for ViewProfileHandler {
    fn action_type(&self) -> ActionType {
        ActionType::ViewProfile
    }

    async fn execute(&self, ctx: &HandlerContext<'_>) -> Result<(), HandlerError> {
        tracing::info!(id = %ctx.action.id, "view_profile not implemented, completing as no-op");
        Ok(())
    }
}
