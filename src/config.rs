#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let ollama_url = env_or("WINGMAN_OLLAMA_URL", "http://localhost:11434/api/chat");
        let ollama_model = env_or("WINGMAN_OLLAMA_MODEL", "llama3.1:8b");
        let log_level = env_or("WINGMAN_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            ollama_url,
            ollama_model,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
