use async_trait::async_trait;
use uuid::Uuid;

use crate::db;
use crate::decision::DecisionEngine;
use crate::models::{ActionType, Profile};

use super::{ActionHandler, HandlerContext, HandlerError};

/// Decides whether the persona likes back the profile that liked it, and
/// records the outcome in three places: the outcome store, the queue row's
/// payload, and the activity log.
pub struct RespondToLikeHandler {
    engine: DecisionEngine,
}

impl RespondToLikeHandler {
    pub fn new(engine: DecisionEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl ActionHandler for RespondToLikeHandler {
    fn action_type(&self) -> ActionType {
        ActionType::RespondToLike
    }

    async fn execute(&self, ctx: &HandlerContext<'_>) -> Result<(), HandlerError> {
        let action = ctx.action;

        // At most one recorded decision per ordered pair, even when
        // duplicate queue rows exist.
        if db::profile_actions::exists(ctx.pool, action.persona_id, action.target_id).await? {
            tracing::info!(
                persona_id = %action.persona_id,
                target_id = %action.target_id,
                "decision already recorded, skipping"
            );
            return Ok(());
        }

        let persona = load_profile(ctx, action.persona_id).await?;
        let target = load_profile(ctx, action.target_id).await?;

        tracing::info!(
            persona = %persona.nickname,
            target = %target.nickname,
            "deciding response to like"
        );

        let outcome = self.engine.decide(ctx.pool, &persona, &target).await;

        db::profile_actions::create(
            ctx.pool,
            action.persona_id,
            action.target_id,
            outcome.decision.as_str(),
        )
        .await?;

        db::queue::attach_outcome(
            ctx.pool,
            action.id,
            outcome.decision.as_str(),
            &outcome.reason,
            self.engine.model(),
        )
        .await?;

        db::activity_log::create(
            ctx.pool,
            action.persona_id,
            action.target_id,
            outcome.decision.as_str(),
            &outcome.reason,
            self.engine.model(),
        )
        .await?;

        tracing::info!(
            decision = %outcome.decision,
            fallback = outcome.fallback,
            "response recorded"
        );
        Ok(())
    }
}

async fn load_profile(ctx: &HandlerContext<'_>, id: Uuid) -> Result<Profile, HandlerError> {
    db::profiles::find_by_id(ctx.pool, id)
        .await?
        .ok_or_else(|| HandlerError::retryable(format!("profile {id} not found")))
}
