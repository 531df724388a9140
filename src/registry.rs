//! Provider registry
//!
//! Credential-keyed registry of catalog/router pairs, owned by the caller's
//! composition root. Replaces ambient global state: a credential change
//! builds a fresh pair instead of mutating a shared one, which keeps
//! lifecycle and test isolation explicit.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info};

use crate::{
    catalog::{CatalogClient, ModelCatalog},
    config::Config,
    fallback::{CooldownTracker, FallbackRouter},
};

/// A catalog/router pair bound to one credential
#[derive(Clone)]
pub struct ProviderHandle {
    pub catalog: Arc<ModelCatalog>,
    pub router: Arc<FallbackRouter>,
}

/// Registry of provider handles keyed by credential
pub struct ProviderRegistry {
    http_client: reqwest::Client,
    handles: Mutex<HashMap<String, ProviderHandle>>,
}

impl ProviderRegistry {
    /// Create a registry sharing one connection-pooled HTTP client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            handles: Mutex::new(HashMap::new()),
        }
    }

    /// Get the handle for the configured credential, building it on first use
    pub fn handle(&self, config: &Config) -> ProviderHandle {
        let mut handles = self.handles.lock().unwrap();

        if let Some(handle) = handles.get(&config.github_token) {
            debug!("Reusing provider handle for credential");
            return handle.clone();
        }

        info!(base_url = %config.base_url, "Building provider handle");

        let client = CatalogClient::new(self.http_client.clone(), config);
        let catalog = Arc::new(ModelCatalog::new(
            client,
            Duration::from_secs(config.catalog_ttl_seconds),
        ));
        let cooldown = Arc::new(CooldownTracker::with_cooldown(Duration::from_secs(
            config.cooldown_seconds,
        )));
        let router = Arc::new(FallbackRouter::new(catalog.clone(), cooldown));

        let handle = ProviderHandle { catalog, router };
        handles.insert(config.github_token.clone(), handle.clone());
        handle
    }

    /// Get the namespaced model list for router registration
    ///
    /// Integration boundary: degrades to an empty list on any catalog
    /// failure, never propagates an error to the routing layer.
    pub async fn get_litellm_model_list(&self, config: &Config) -> Vec<String> {
        let handle = self.handle(config);
        handle.catalog.get_litellm_model_list().await
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}
