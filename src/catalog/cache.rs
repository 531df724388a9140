//! Model catalog cache
//!
//! Caches the catalog with a TTL and derives tier and fallback queries over
//! it. All operations absorb fetch failures into degraded values: the
//! previous snapshot if one exists, an empty list otherwise. Nothing here
//! returns an error.

use std::sync::RwLock;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::catalog::client::CatalogClient;
use crate::catalog::models::{
    strip_namespace, with_namespace, CatalogSnapshot, ModelDescriptor,
};

/// TTL-cached view of the GitHub Models catalog
pub struct ModelCatalog {
    client: CatalogClient,
    snapshot: RwLock<Option<CatalogSnapshot>>,
    ttl: Duration,
}

impl ModelCatalog {
    /// Create an empty catalog cache; the first query triggers a fetch
    pub fn new(client: CatalogClient, ttl: Duration) -> Self {
        Self {
            client,
            snapshot: RwLock::new(None),
            ttl,
        }
    }

    /// Get the list of available models
    ///
    /// Returns the cached snapshot while it is within the TTL, unless
    /// `force_refresh` is set. On fetch failure the previous snapshot is
    /// returned unchanged, or an empty list if none exists yet.
    pub async fn get_available_models(&self, force_refresh: bool) -> Vec<ModelDescriptor> {
        if !force_refresh {
            let snapshot = self.snapshot.read().unwrap();
            if let Some(current) = snapshot.as_ref() {
                if current.is_fresh(self.ttl) {
                    return current.models.clone();
                }
            }
        }

        // Lock is released before the fetch; concurrent callers under an
        // expired cache may both fetch, last writer wins.
        match self.client.fetch_models().await {
            Ok(models) => {
                info!(count = models.len(), "Fetched GitHub models catalog");
                let mut snapshot = self.snapshot.write().unwrap();
                *snapshot = Some(CatalogSnapshot::new(models.clone()));
                models
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch GitHub models catalog");
                let snapshot = self.snapshot.read().unwrap();
                snapshot
                    .as_ref()
                    .map(|s| s.models.clone())
                    .unwrap_or_default()
            }
        }
    }

    /// Get models in the given rate limit tier, in catalog order
    ///
    /// Models without a tier never match.
    pub async fn get_models_by_tier(&self, tier: &str) -> Vec<ModelDescriptor> {
        self.get_available_models(false)
            .await
            .into_iter()
            .filter(|m| m.rate_limit_tier.as_deref() == Some(tier))
            .collect()
    }

    /// Get fallback candidates for the given model
    ///
    /// Accepts either a namespaced identifier ("github/openai/gpt-4.1") or a
    /// bare catalog id. Returns the other models in the same tier, each
    /// re-prefixed with the namespace, in catalog order. An unknown model or
    /// one without a tier yields no candidates.
    pub async fn get_fallback_models(&self, current_model: &str) -> Vec<String> {
        let catalog_id = strip_namespace(current_model);
        let models = self.get_available_models(false).await;

        let Some(current) = models.iter().find(|m| m.id == catalog_id) else {
            warn!(model = %catalog_id, "Current model not found in GitHub models catalog");
            return Vec::new();
        };

        let Some(tier) = current.rate_limit_tier.as_deref() else {
            warn!(model = %catalog_id, "Current model has no rate limit tier, no fallbacks");
            return Vec::new();
        };

        let fallbacks: Vec<String> = models
            .iter()
            .filter(|m| m.id != catalog_id && m.rate_limit_tier.as_deref() == Some(tier))
            .map(|m| with_namespace(&m.id))
            .collect();

        info!(
            model = %current_model,
            tier = %tier,
            count = fallbacks.len(),
            "Found fallback models"
        );
        fallbacks
    }

    /// Get every catalog model as a namespaced identifier, for registration
    /// with a LiteLLM-style router
    pub async fn get_litellm_model_list(&self) -> Vec<String> {
        self.get_available_models(false)
            .await
            .iter()
            .map(|m| with_namespace(&m.id))
            .collect()
    }
}
