//! Configuration management
//!
//! Configuration is loaded from environment variables, with a `.env` file
//! picked up when present.

use anyhow::{bail, Context, Result};
use std::env;

/// Default base URL for the GitHub Models API
pub const DEFAULT_BASE_URL: &str = "https://models.github.ai";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub token used as the bearer credential for catalog requests
    pub github_token: String,
    /// GitHub Models API base URL
    pub base_url: String,

    /// Catalog cache TTL (in seconds)
    pub catalog_ttl_seconds: u64,
    /// Cooldown window for rate-limited models (in seconds)
    pub cooldown_seconds: u64,
    /// Per-request timeout for catalog fetches (in seconds)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let github_token = env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?;
        if github_token.trim().is_empty() {
            bail!("GITHUB_TOKEN must not be empty");
        }

        Ok(Self {
            github_token,
            base_url: env::var("GITHUB_MODELS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),

            catalog_ttl_seconds: env::var("CATALOG_CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("Invalid CATALOG_CACHE_TTL_SECONDS")?,
            cooldown_seconds: env::var("MODEL_COOLDOWN_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("Invalid MODEL_COOLDOWN_SECONDS")?,
            request_timeout_seconds: env::var("CATALOG_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("Invalid CATALOG_REQUEST_TIMEOUT_SECONDS")?,
        })
    }
}
