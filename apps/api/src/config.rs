use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Cosmetic "analysis" pause before the magazine is shown. Zero disables it.
    pub analysis_delay: Duration,
    pub session_ttl: Duration,
    /// Optional JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_delay: Duration::from_millis(parse_env("ANALYSIS_DELAY_MS", 1500)?),
            session_ttl: Duration::from_secs(parse_env("SESSION_TTL_SECS", 3600)?),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_delay: Duration::from_millis(1500),
            session_ttl: Duration::from_secs(3600),
            catalog_path: None,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
