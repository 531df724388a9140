//! Error types for the catalog client layer
//!
//! Only the HTTP client surfaces typed errors. The cache, router, and
//! registry absorb every failure into degraded return values (empty list,
//! `None`) and log instead, so callers never see an error cross those
//! boundaries.

use thiserror::Error;

/// Errors from a catalog fetch
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type CatalogResult<T> = Result<T, CatalogError>;
