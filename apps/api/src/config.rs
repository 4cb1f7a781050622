use anyhow::{Context, Result};

use crate::llm_client;

/// Application configuration loaded from environment variables.
/// Everything has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional override for the bundled known-skills list.
    pub skills_db_path: Option<String>,
    pub github_api_url: String,
    pub github_token: Option<String>,
    /// Enables live (LLM-backed) advice, plans and evaluation when present.
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub match_cache_ttl_secs: u64,
    pub match_cache_capacity: usize,
    pub session_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skills_db_path: optional_env("SKILLS_DB_PATH"),
            github_api_url: optional_env("GITHUB_API_URL")
                .unwrap_or_else(|| "https://api.github.com".to_string()),
            github_token: optional_env("GITHUB_TOKEN"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL")
                .unwrap_or_else(|| llm_client::DEFAULT_API_URL.to_string()),
            match_cache_ttl_secs: parse_env("MATCH_CACHE_TTL_SECS", 300)?,
            match_cache_capacity: parse_env("MATCH_CACHE_CAPACITY", 256)?,
            session_capacity: parse_env("SESSION_CAPACITY", 1024)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            skills_db_path: None,
            github_api_url: "https://api.github.com".to_string(),
            github_token: None,
            anthropic_api_key: None,
            anthropic_api_url: llm_client::DEFAULT_API_URL.to_string(),
            match_cache_ttl_secs: 300,
            match_cache_capacity: 256,
            session_capacity: 1024,
        }
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
