use anyhow::{Context, Result};

/// Display title used when APP_NAME is not configured.
pub const DEFAULT_APP_NAME: &str = "Gerador de Descrições • SuperFrete";

/// Application configuration loaded from environment variables.
/// Startup aborts with a readable message if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub app_name: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a key lookup. Separated from `from_env` so
    /// tests can exercise defaulting without mutating process-wide state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            openai_api_key: get("OPENAI_API_KEY").context(
                "OPENAI_API_KEY não encontrada. Configure em Render → Settings → Environment.",
            )?,
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
