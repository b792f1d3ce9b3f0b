use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const INFERENCE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug)]
pub enum InferenceError {
    Transport(reqwest::Error),
    BadStatus(StatusCode),
}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceError::Transport(err) => write!(f, "inference request failed: {err}"),
            InferenceError::BadStatus(status) => write!(f, "inference service returned {status}"),
        }
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        InferenceError::Transport(err)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Synchronous-style chat call against an Ollama-compatible endpoint.
pub struct InferenceClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl InferenceClient {
    pub fn new(url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(INFERENCE_TIMEOUT)
                .build()
                .expect("Failed to build reqwest client"),
            url,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system+user exchange and return the assistant's text.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, InferenceError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
        };

        let resp = self.client.post(&self.url).json(&request).send().await?;

        if resp.status() != StatusCode::OK {
            return Err(InferenceError::BadStatus(resp.status()));
        }

        let body: ChatResponse = resp.json().await?;
        Ok(body.message.content)
    }
}
