use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare `resume-api` starts on loopback.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Loopback by default. The service holds personal data and has no auth.
    pub bind_addr: IpAddr,
    pub data_dir: PathBuf,
    /// Optional newline-separated stop-word list replacing the built-in one.
    pub stop_words_path: Option<PathBuf>,
    /// Browser origins allowed by CORS, from comma-separated `ALLOWED_ORIGINS`.
    pub allowed_origins: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: env_or(&lookup, "PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            bind_addr: env_or(&lookup, "BIND_ADDR", "127.0.0.1")
                .parse::<IpAddr>()
                .context("BIND_ADDR must be an IP address")?,
            data_dir: PathBuf::from(env_or(&lookup, "DATA_DIR", "./data")),
            stop_words_path: lookup("STOP_WORDS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            allowed_origins: env_or(&lookup, "ALLOWED_ORIGINS", DEFAULT_ORIGINS)
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            rust_log: env_or(&lookup, "RUST_LOG", "info"),
        })
    }
}

fn env_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}
