//! gh-models-router - GitHub Models catalog client with rate limit fallback
//!
//! This library discovers available models from the GitHub Models catalog,
//! caches the catalog briefly, classifies models into rate limit tiers, and
//! proposes same-tier fallbacks when the active model is rate limited.
//! A cooldown tracker excludes recently failed models from selection until
//! a fixed window elapses.
//!
//! Public operations never return errors: transport failures, unknown
//! models, and exhausted fallbacks all degrade to an empty list or `None`
//! with a log line.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fallback;
pub mod registry;

pub use crate::catalog::{is_github_model, CatalogClient, ModelCatalog, ModelDescriptor};
pub use crate::config::Config;
pub use crate::error::{CatalogError, CatalogResult};
pub use crate::fallback::{CooldownTracker, FallbackRouter};
pub use crate::registry::{ProviderHandle, ProviderRegistry};
