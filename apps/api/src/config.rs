use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis_backend_url: String,
    pub ats_backend_path: String,
    pub ats_backend_timeout: Duration,
    pub backend_health_path: String,
    /// Pins the local scorer's variance bonus when set.
    pub ats_variance_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_backend_url: "http://localhost:8000".to_string(),
            ats_backend_path: "/api/ats-calculator".to_string(),
            ats_backend_timeout: Duration::from_secs(10),
            backend_health_path: "/api/health".to_string(),
            ats_variance_seed: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            analysis_backend_url: lookup("ANALYSIS_BACKEND_URL")
                .unwrap_or(defaults.analysis_backend_url),
            ats_backend_path: lookup("ATS_BACKEND_PATH").unwrap_or(defaults.ats_backend_path),
            ats_backend_timeout: match lookup("ATS_BACKEND_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(
                    v.parse::<u64>()
                        .context("ATS_BACKEND_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => defaults.ats_backend_timeout,
            },
            backend_health_path: lookup("BACKEND_HEALTH_PATH")
                .unwrap_or(defaults.backend_health_path),
            ats_variance_seed: lookup("ATS_VARIANCE_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("ATS_VARIANCE_SEED must be an unsigned integer")?,
            port: lookup("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
