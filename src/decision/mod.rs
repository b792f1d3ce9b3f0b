pub mod inference;
pub mod parser;
pub mod prompt;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::Profile;

pub use inference::{InferenceClient, InferenceError};
use parser::Verdict;

/// Fallback like-probability when a persona has no settings row or the
/// settings fetch itself fails.
pub const DEFAULT_RESPONSE_RATE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Like,
    Pass,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Like => "like",
            Decision::Pass => "pass",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub reason: String,
    pub fallback: bool,
}

/// Produces a like/pass verdict for a persona. Inference first; on any
/// inference failure, a probability-weighted random decision. Never fails.
pub struct DecisionEngine {
    inference: InferenceClient,
}

impl DecisionEngine {
    pub fn new(inference: InferenceClient) -> Self {
        Self { inference }
    }

    pub fn model(&self) -> &str {
        self.inference.model()
    }

    pub async fn decide(
        &self,
        pool: &PgPool,
        persona: &Profile,
        target: &Profile,
    ) -> DecisionOutcome {
        let user_prompt = prompt::build_prompt(persona, target, Utc::now().date_naive());

        match self
            .inference
            .chat(prompt::SYSTEM_INSTRUCTION, &user_prompt)
            .await
        {
            Ok(answer) => {
                tracing::debug!(chars = answer.len(), "inference answer received");
                let decision = match parser::parse_verdict(&answer) {
                    Verdict::Like => Decision::Like,
                    // Ambiguous output defaults to the negative.
                    Verdict::Pass | Verdict::Ambiguous => Decision::Pass,
                };
                DecisionOutcome {
                    decision,
                    reason: answer,
                    fallback: false,
                }
            }
            Err(err) => {
                tracing::warn!(persona_id = %persona.id, "inference failed: {err}");
                self.fallback(pool, persona.id, &err).await
            }
        }
    }

    async fn fallback(
        &self,
        pool: &PgPool,
        persona_id: Uuid,
        err: &InferenceError,
    ) -> DecisionOutcome {
        let rate = db::settings::response_rate(pool, persona_id)
            .await
            .ok()
            .flatten()
            .unwrap_or(DEFAULT_RESPONSE_RATE);

        let decision = draw(rate);
        tracing::warn!(
            persona_id = %persona_id,
            rate,
            decision = %decision,
            "random fallback decision"
        );

        DecisionOutcome {
            decision,
            reason: format!(
                "Random decision after inference failure (response_rate={rate}): {err}"
            ),
            fallback: true,
        }
    }
}

/// Bernoulli draw: Like iff a uniform sample in [0,1) lands below `rate`.
pub fn draw(rate: f64) -> Decision {
    if rand::random::<f64>() < rate {
        Decision::Like
    } else {
        Decision::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_respects_degenerate_rates() {
        for _ in 0..100 {
            assert_eq!(draw(1.0), Decision::Like);
            assert_eq!(draw(0.0), Decision::Pass);
        }
    }

    #[test]
    fn draw_converges_to_the_configured_rate() {
        let rate = 0.7;
        let n = 2000;
        let likes = (0..n).filter(|_| draw(rate) == Decision::Like).count();
        let fraction = likes as f64 / n as f64;
        assert!(
            (fraction - rate).abs() < 0.05,
            "like fraction {fraction} strayed from rate {rate}"
        );
    }
}
