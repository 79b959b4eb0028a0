//! Catalog client error types.

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
///
/// Fetch failures never propagate into cart state; the rendering layer
/// maps them to loading-skeleton or not-found states.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed or answered a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not parse as the expected type.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
