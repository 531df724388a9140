//! Cooldown-aware fallback selection
//!
//! Walks the same-tier fallback candidates from the catalog and picks the
//! first one not in cooldown.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::ModelCatalog;

use super::cooldown::CooldownTracker;

/// Fallback router for rate-limited models
///
/// Composes the catalog cache (candidate discovery) with the cooldown
/// tracker (availability filtering).
pub struct FallbackRouter {
    catalog: Arc<ModelCatalog>,
    cooldown: Arc<CooldownTracker>,
}

impl FallbackRouter {
    /// Create a new fallback router
    pub fn new(catalog: Arc<ModelCatalog>, cooldown: Arc<CooldownTracker>) -> Self {
        Self { catalog, cooldown }
    }

    /// Get the next available fallback model for a rate-limited one
    ///
    /// Candidates come from the catalog in catalog order; models still in
    /// cooldown are skipped. Returns `None` when every candidate is
    /// cooling down or no same-tier candidate exists.
    pub async fn get_next_available_model(&self, current_model: &str) -> Option<String> {
        let candidates = self.catalog.get_fallback_models(current_model).await;

        for candidate in candidates {
            if self.cooldown.is_model_available(&candidate) {
                info!(from = %current_model, to = %candidate, "Switching to fallback model");
                return Some(candidate);
            }
        }

        warn!(model = %current_model, "No available fallback models");
        None
    }

    /// Mark a model as rate limited
    pub fn mark_model_failed(&self, model: &str) {
        self.cooldown.mark_model_failed(model);
    }

    /// Check if a model is available (not in cooldown)
    pub fn is_model_available(&self, model: &str) -> bool {
        self.cooldown.is_model_available(model)
    }
}
