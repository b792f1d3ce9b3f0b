use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use wingman::config::Config;
use wingman::state::SharedState;

/// A scheduler wired against a dedicated scratch database. Inference points
/// at a closed local port, so every call fails immediately and the engine
/// takes the fallback path.
pub struct TestApp {
    pub state: SharedState,
    pub pool: PgPool,
    pub db_name: String,
}

/// Spawn a test app with a fresh scratch database, or None when
/// DATABASE_URL is not set (the suite then skips database-backed tests).
pub async fn try_spawn() -> Option<TestApp> {
    let _ = dotenvy::dotenv();

    let Ok(base_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database-backed test");
        return None;
    };

    let db_name = format!(
        "wingman_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to default postgres DB to create the scratch DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        ollama_url: "http://127.0.0.1:1/api/chat".to_string(),
        ollama_model: "test-model".to_string(),
        log_level: "warn".to_string(),
    };

    let state = wingman::build_state(pool.clone(), config);

    Some(TestApp {
        state,
        pool,
        db_name,
    })
}

impl TestApp {
    pub async fn seed_profile(&self, nickname: &str, is_persona: bool) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO profiles (nickname, birth_date, gender, bio, interests, is_persona)
             VALUES ($1, '1995-04-12', 'female', 'test bio', '[\"hiking\"]', $2)
             RETURNING id",
        )
        .bind(nickname)
        .bind(is_persona)
        .fetch_one(&self.pool)
        .await
        .expect("failed to seed profile")
    }

    pub async fn seed_settings(&self, persona_id: Uuid, response_rate: f64) {
        sqlx::query("INSERT INTO persona_settings (persona_id, response_rate) VALUES ($1, $2)")
            .bind(persona_id)
            .bind(response_rate)
            .execute(&self.pool)
            .await
            .expect("failed to seed settings");
    }

    /// Insert a queue row directly, bypassing the typed enqueue API so tests
    /// can plant arbitrary type tags and retry counts.
    pub async fn enqueue_raw(
        &self,
        persona_id: Uuid,
        target_id: Uuid,
        action_type: &str,
        scheduled_at: DateTime<Utc>,
        retry_count: i32,
    ) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO action_queue (persona_id, target_id, action_type, scheduled_at, retry_count)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(persona_id)
        .bind(target_id)
        .bind(action_type)
        .bind(scheduled_at)
        .bind(retry_count)
        .fetch_one(&self.pool)
        .await
        .expect("failed to enqueue raw action")
    }

    pub async fn set_status(&self, id: Uuid, status: &str) {
        sqlx::query("UPDATE action_queue SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .expect("failed to set status");
    }

    pub async fn count_profile_actions(&self, profile_id: Uuid, target_id: Uuid) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM profile_actions WHERE profile_id = $1 AND target_id = $2",
        )
        .bind(profile_id)
        .bind(target_id)
        .fetch_one(&self.pool)
        .await
        .expect("failed to count profile actions")
    }

    pub async fn count_activity(&self, persona_id: Uuid) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT count(*) FROM activity_log WHERE persona_id = $1")
            .bind(persona_id)
            .fetch_one(&self.pool)
            .await
            .expect("failed to count activity log entries")
    }
}

/// Drop the scratch database after a test completes.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
