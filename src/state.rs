use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::handlers::HandlerRegistry;
use crate::stats::Stats;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub handlers: HandlerRegistry,
    pub stats: Stats,
}
