use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PersonaSettings;

pub async fn find_by_persona(
    pool: &PgPool,
    persona_id: Uuid,
) -> Result<Option<PersonaSettings>, sqlx::Error> {
    sqlx::query_as::<_, PersonaSettings>(
        "SELECT * FROM persona_settings WHERE persona_id = $1",
    )
    .bind(persona_id)
    .fetch_optional(pool)
    .await
}

pub async fn response_rate(
    pool: &PgPool,
    persona_id: Uuid,
) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar::<_, f64>(
        "SELECT response_rate FROM persona_settings WHERE persona_id = $1",
    )
    .bind(persona_id)
    .fetch_optional(pool)
    .await
}
