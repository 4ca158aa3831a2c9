use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default — the binary runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, creating a builder session requires this code. When unset
    /// the builder is intentionally public.
    pub access_code: Option<String>,
    /// Idle time before a session (and its edits) is discarded.
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let session_ttl = match std::env::var("SESSION_TTL") {
            Ok(raw) => humantime::parse_duration(&raw)
                .with_context(|| format!("SESSION_TTL '{raw}' is not a valid duration"))?,
            Err(_) => Duration::from_secs(30 * 60),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            access_code: std::env::var("ACCESS_CODE").ok().filter(|c| !c.is_empty()),
            session_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_parses_humantime_strings() {
        assert_eq!(
            humantime::parse_duration("30m").expect("parse"),
            Duration::from_secs(1800)
        );
        assert_eq!(
            humantime::parse_duration("90s").expect("parse"),
            Duration::from_secs(90)
        );
    }
}
