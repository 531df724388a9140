//! GitHub Models catalog API client
//!
//! HTTP client for the catalog endpoint. This is the only layer that
//! surfaces typed errors; the cache above it absorbs them.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{debug, error, instrument};

use crate::{
    catalog::models::ModelDescriptor,
    config::Config,
    error::{CatalogError, CatalogResult},
};

/// API version header required by the GitHub API
const API_VERSION: &str = "2022-11-28";

/// Catalog API client
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    request_timeout: Duration,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.github_token.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        }
    }

    /// Fetch the model catalog
    #[instrument(skip(self))]
    pub async fn fetch_models(&self) -> CatalogResult<Vec<ModelDescriptor>> {
        let url = format!("{}/catalog/models", self.base_url);

        debug!(url = %url, "Fetching model catalog");

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Catalog response status");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Catalog request failed");
            return Err(CatalogError::Status { status, body });
        }

        let body = response.text().await?;

        let models: Vec<ModelDescriptor> = match serde_json::from_str(&body) {
            Ok(m) => m,
            Err(e) => {
                error!(error = %e, body = %body, "Failed to parse catalog response");
                return Err(CatalogError::Parse(e));
            }
        };

        debug!(count = models.len(), "Catalog fetched");
        Ok(models)
    }

    /// Build headers with bearer authentication
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .expect("Invalid GitHub token"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        headers
    }
}
