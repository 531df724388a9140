//! GitHub Models catalog integration
//!
//! Client and TTL cache for the hosted model catalog, plus tier and
//! fallback queries over it.

pub mod cache;
pub mod client;
pub mod models;

pub use cache::ModelCatalog;
pub use client::CatalogClient;
pub use models::{is_github_model, CatalogSnapshot, ModelDescriptor, GITHUB_PREFIX};
