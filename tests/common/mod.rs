//! Common test utilities
//!
//! Provides a wiremock-based mock of the GitHub Models catalog endpoint and
//! shared fixtures used across the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use gh_models_router::{CatalogClient, Config, ModelCatalog};

/// Default test token
pub const TEST_TOKEN: &str = "ghp_test_token";

/// Build a config pointing at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config {
        github_token: TEST_TOKEN.to_string(),
        base_url: base_url.to_string(),
        catalog_ttl_seconds: 300,
        cooldown_seconds: 300,
        request_timeout_seconds: 10,
    }
}

/// Build a catalog cache backed by the given config
pub fn catalog_for(config: &Config) -> ModelCatalog {
    let client = CatalogClient::new(reqwest::Client::new(), config);
    ModelCatalog::new(client, Duration::from_secs(config.catalog_ttl_seconds))
}

/// The four-model catalog used throughout the fallback tests:
/// three "high" tier models and one "low" tier model.
pub fn sample_catalog() -> Value {
    json!([
        {
            "id": "openai/gpt-4.1",
            "name": "OpenAI GPT-4.1",
            "publisher": "OpenAI",
            "rate_limit_tier": "high"
        },
        {
            "id": "meta/llama-3.3-70b-instruct",
            "name": "Llama 3.3 70B Instruct",
            "publisher": "Meta",
            "rate_limit_tier": "high"
        },
        {
            "id": "mistral-ai/mistral-large-2411",
            "name": "Mistral Large 24.11",
            "publisher": "Mistral AI",
            "rate_limit_tier": "high"
        },
        {
            "id": "openai/gpt-4o-mini",
            "name": "OpenAI GPT-4o mini",
            "publisher": "OpenAI",
            "rate_limit_tier": "low"
        }
    ])
}

/// Mock GitHub Models catalog server wrapper
pub struct MockCatalogServer {
    server: MockServer,
}

impl MockCatalogServer {
    /// Start a new mock catalog server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful catalog response
    pub async fn mock_catalog_success(&self, models: Value) {
        self.catalog_mock(models).mount(&self.server).await;
    }

    /// Mock a successful catalog response with an expected call count
    ///
    /// The expectation is verified when the server drops.
    pub async fn mock_catalog_success_expect(&self, models: Value, calls: u64) {
        self.catalog_mock(models)
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Mock a successful catalog response that serves a limited number of
    /// requests, letting a later-mounted mock take over afterwards
    pub async fn mock_catalog_success_up_to(&self, models: Value, calls: u64) {
        self.catalog_mock(models)
            .up_to_n_times(calls)
            .mount(&self.server)
            .await;
    }

    /// Mock a catalog error response
    pub async fn mock_catalog_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/catalog/models"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": "upstream error"})),
            )
            .mount(&self.server)
            .await;
    }

    fn catalog_mock(&self, models: Value) -> Mock {
        Mock::given(method("GET"))
            .and(path("/catalog/models"))
            .and(header("Accept", "application/vnd.github+json"))
            .and(header(
                "Authorization",
                format!("Bearer {}", TEST_TOKEN).as_str(),
            ))
            .and(header("X-GitHub-Api-Version", "2022-11-28"))
            .respond_with(ResponseTemplate::new(200).set_body_json(models))
    }
}
