//! Catalog data types
//!
//! Wire types for the GitHub Models catalog endpoint plus the cached
//! snapshot. The catalog response guarantees `id` and `rate_limit_tier`;
//! everything else is best-effort.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Namespace prefix distinguishing GitHub models in a multi-provider list
pub const GITHUB_PREFIX: &str = "github/";

/// A single model entry from the catalog
///
/// Immutable once fetched; fields come verbatim from the catalog response.
/// A model without a `rate_limit_tier` is treated as its own singleton tier:
/// it never matches a tier filter and has no fallback peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Catalog identifier in `publisher/name` form (e.g. "openai/gpt-4.1")
    pub id: String,
    /// Human-readable model name (`name` on the wire)
    #[serde(default, alias = "name")]
    pub display_name: String,
    /// Publishing organization (e.g. "OpenAI")
    #[serde(default)]
    pub publisher: String,
    /// Rate limit tier ("low", "high", "custom", "embeddings", ...)
    #[serde(default)]
    pub rate_limit_tier: Option<String>,
}

/// A fetched catalog with its fetch time
///
/// Replaced wholesale on refresh, never mutated in place.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub models: Vec<ModelDescriptor>,
    pub fetched_at: Instant,
}

impl CatalogSnapshot {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            models,
            fetched_at: Instant::now(),
        }
    }

    /// Whether the snapshot is still within the cache TTL
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Check whether an identifier belongs to the GitHub Models namespace
pub fn is_github_model(model: &str) -> bool {
    model.starts_with(GITHUB_PREFIX)
}

/// Strip the `github/` namespace prefix if present
pub fn strip_namespace(model: &str) -> &str {
    model.strip_prefix(GITHUB_PREFIX).unwrap_or(model)
}

/// Re-prefix a catalog identifier with the `github/` namespace
pub fn with_namespace(catalog_id: &str) -> String {
    format!("{}{}", GITHUB_PREFIX, catalog_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "id": "openai/gpt-4.1",
            "name": "OpenAI GPT-4.1",
            "publisher": "OpenAI",
            "rate_limit_tier": "high"
        }"#;

        let model: ModelDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, "openai/gpt-4.1");
        assert_eq!(model.display_name, "OpenAI GPT-4.1");
        assert_eq!(model.publisher, "OpenAI");
        assert_eq!(model.rate_limit_tier.as_deref(), Some("high"));
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        // Only id is guaranteed; a missing tier stays None
        let json = r#"{"id": "openai/gpt-4o-mini"}"#;

        let model: ModelDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, "openai/gpt-4o-mini");
        assert_eq!(model.display_name, "");
        assert_eq!(model.rate_limit_tier, None);
    }

    #[test]
    fn test_is_github_model() {
        assert!(is_github_model("github/openai/gpt-4.1"));
        assert!(!is_github_model("openai/gpt-4.1"));
        assert!(!is_github_model("anthropic/claude-3"));
    }

    #[test]
    fn test_namespace_round_trip() {
        assert_eq!(strip_namespace("github/openai/gpt-4.1"), "openai/gpt-4.1");
        assert_eq!(strip_namespace("openai/gpt-4.1"), "openai/gpt-4.1");
        assert_eq!(with_namespace("openai/gpt-4.1"), "github/openai/gpt-4.1");
    }

    #[test]
    fn test_snapshot_freshness() {
        let snapshot = CatalogSnapshot::new(vec![]);
        assert!(snapshot.is_fresh(Duration::from_secs(300)));
        assert!(!snapshot.is_fresh(Duration::ZERO));
    }
}
