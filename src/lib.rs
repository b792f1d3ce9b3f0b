pub mod config;
pub mod db;
pub mod decision;
pub mod dispatcher;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::decision::{DecisionEngine, InferenceClient};
use crate::handlers::{
    HandlerRegistry, RespondToLikeHandler, SendChatMessageHandler, ViewProfileHandler,
};
use crate::state::{AppState, SharedState};
use crate::stats::Stats;

/// Wire the inference client, decision engine, and handler registry.
pub fn build_state(pool: PgPool, config: Config) -> SharedState {
    let inference = InferenceClient::new(config.ollama_url.clone(), config.ollama_model.clone());
    let engine = DecisionEngine::new(inference);

    let mut handlers = HandlerRegistry::new();
    handlers.register(Arc::new(RespondToLikeHandler::new(engine)));
    handlers.register(Arc::new(SendChatMessageHandler));
    handlers.register(Arc::new(ViewProfileHandler));

    Arc::new(AppState {
        pool,
        config,
        handlers,
        stats: Stats::new(),
    })
}
