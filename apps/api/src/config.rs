use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::assessment::careers::DEFAULT_RECOMMENDATION_LIMIT;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Assessment config JSON on disk. Falls back to the embedded payload when unset.
    pub assessment_config_path: Option<PathBuf>,
    /// Overrides the assessment config's `default_locale`.
    pub default_locale: Option<String>,
    pub career_recommendation_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            assessment_config_path: optional_env("ASSESSMENT_CONFIG_PATH").map(PathBuf::from),
            default_locale: optional_env("DEFAULT_LOCALE"),
            career_recommendation_limit: parse_recommendation_limit(optional_env(
                "CAREER_RECOMMENDATION_LIMIT",
            ))?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_recommendation_limit(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_RECOMMENDATION_LIMIT);
    };
    let limit = raw
        .trim()
        .parse::<usize>()
        .context("CAREER_RECOMMENDATION_LIMIT must be a positive integer")?;
    anyhow::ensure!(limit > 0, "CAREER_RECOMMENDATION_LIMIT must be at least 1");
    Ok(limit)
}
