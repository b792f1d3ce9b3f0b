use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::db;
use crate::handlers::{HandlerContext, HandlerError};
use crate::models::{ActionType, QueueAction};
use crate::state::SharedState;

pub const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);
pub const BATCH_LIMIT: i64 = 10;
pub const MAX_RETRIES: i32 = 3;
pub const RETRY_DELAY_MINUTES: i64 = 5;
pub const ERROR_MESSAGE_MAX: usize = 500;

/// The polling loop. Runs one pass immediately, then one per minute until
/// shutdown is signaled.
pub async fn run(state: SharedState, mut shutdown: watch::Receiver<bool>) {
    tracing::info!(
        model = %state.config.ollama_model,
        endpoint = %state.config.ollama_url,
        "dispatcher started"
    );

    loop {
        if *shutdown.borrow() {
            break;
        }

        match run_pass(&state).await {
            Ok(0) => tracing::debug!("no due actions"),
            Ok(count) => tracing::info!("pass finished: {count} actions processed"),
            Err(e) => tracing::error!("failed to poll queue: {e}"),
        }

        tokio::select! {
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
            _ = shutdown.changed() => {}
        }
    }

    tracing::info!("dispatcher stopped");
}

/// One pass: fetch due actions (oldest first, bounded batch) and process
/// them strictly sequentially.
pub async fn run_pass(state: &SharedState) -> Result<usize, String> {
    let actions = db::queue::fetch_due(&state.pool, Utc::now(), BATCH_LIMIT)
        .await
        .map_err(|e| format!("failed to fetch due actions: {e}"))?;

    if actions.is_empty() {
        return Ok(0);
    }

    tracing::info!("{} due actions found", actions.len());

    for action in &actions {
        process_one(state, action).await;
    }

    Ok(actions.len())
}

/// Claim and execute a single action, then apply the outcome transition.
pub async fn process_one(state: &SharedState, action: &QueueAction) {
    tracing::info!(
        id = %action.id,
        action_type = %action.action_type,
        persona_id = %action.persona_id,
        target_id = %action.target_id,
        retry_count = action.retry_count,
        "processing action"
    );

    state.stats.record_processed();

    match claim_and_execute(state, action).await {
        Ok(()) => {
            if let Err(e) = db::queue::mark_completed(&state.pool, action.id).await {
                tracing::error!(id = %action.id, "failed to mark action completed: {e}");
            }
            state.stats.record_success();
            tracing::info!(id = %action.id, "action completed");
        }
        Err(HandlerError::Permanent(msg)) => {
            let error = truncate_error(&msg);
            if let Err(e) =
                db::queue::mark_failed(&state.pool, action.id, action.retry_count, &error).await
            {
                tracing::error!(id = %action.id, "failed to mark action failed: {e}");
            }
            state.stats.record_failure();
            tracing::error!(id = %action.id, "action failed permanently: {msg}");
        }
        Err(HandlerError::Retryable(msg)) => {
            let error = truncate_error(&msg);
            state.stats.record_failure();

            match plan_failure(action.retry_count, Utc::now()) {
                FailurePlan::Reschedule {
                    retry_count,
                    scheduled_at,
                } => {
                    if let Err(e) = db::queue::mark_retry(
                        &state.pool,
                        action.id,
                        retry_count,
                        scheduled_at,
                        &error,
                    )
                    .await
                    {
                        tracing::error!(id = %action.id, "failed to reschedule action: {e}");
                    }
                    tracing::warn!(
                        id = %action.id,
                        "action failed, retry {retry_count}/{MAX_RETRIES} at {scheduled_at}: {msg}"
                    );
                }
                FailurePlan::GiveUp { retry_count } => {
                    if let Err(e) =
                        db::queue::mark_failed(&state.pool, action.id, retry_count, &error).await
                    {
                        tracing::error!(id = %action.id, "failed to mark action failed: {e}");
                    }
                    tracing::error!(
                        id = %action.id,
                        "action failed after {retry_count} attempts: {msg}"
                    );
                }
            }
        }
    }
}

async fn claim_and_execute(state: &SharedState, action: &QueueAction) -> Result<(), HandlerError> {
    db::queue::mark_processing(&state.pool, action.id).await?;

    let action_type = action
        .action_type
        .parse::<ActionType>()
        .map_err(|e| HandlerError::retryable(e.to_string()))?;

    let handler = state
        .handlers
        .get(action_type)
        .ok_or_else(|| HandlerError::retryable(format!("no handler registered for {action_type}")))?;

    let ctx = HandlerContext {
        pool: &state.pool,
        action,
    };
    handler.execute(&ctx).await
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FailurePlan {
    Reschedule {
        retry_count: i32,
        scheduled_at: DateTime<Utc>,
    },
    GiveUp {
        retry_count: i32,
    },
}

/// Retry transition for a retryable failure: bump the attempt count and
/// reschedule with a fixed delay until the budget is exhausted.
pub(crate) fn plan_failure(retry_count: i32, now: DateTime<Utc>) -> FailurePlan {
    let retry_count = retry_count + 1;
    if retry_count >= MAX_RETRIES {
        FailurePlan::GiveUp { retry_count }
    } else {
        FailurePlan::Reschedule {
            retry_count,
            scheduled_at: now + chrono::Duration::minutes(RETRY_DELAY_MINUTES),
        }
    }
}

/// Inference and database errors can carry large bodies; cap what gets
/// stored on the row.
pub(crate) fn truncate_error(msg: &str) -> String {
    msg.chars().take(ERROR_MESSAGE_MAX).collect()
}
