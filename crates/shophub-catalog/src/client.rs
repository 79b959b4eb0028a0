//! HTTP client for the catalog service.

use crate::CatalogError;
use shophub_commerce::{Product, ProductId};

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Client for the read-only catalog HTTP interface.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client against the configured catalog service.
    ///
    /// The base URL can be overridden at build time through the
    /// `SHOPHUB_CATALOG_URL` environment variable, which keeps server
    /// and client renders pointed at the same service.
    pub fn from_env() -> Self {
        Self::new(option_env!("SHOPHUB_CATALOG_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full product list.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self
            .http
            .get(self.endpoint("/products"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(products)
    }

    /// Fetch the list of category names.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let categories = self
            .http
            .get(self.endpoint("/products/categories"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(categories)
    }

    /// Fetch a single product by id.
    ///
    /// Returns `Ok(None)` for an unknown id. The service answers those
    /// with a 404, an empty body, or a literal `null` depending on the
    /// deployment, so all three map to the absent case.
    pub async fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/products/{id}")))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.error_for_status()?.text().await?;
        parse_product_body(&body)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_product_body(body: &str) -> Result<Option<Product>, CatalogError> {
    let body = body.trim();
    if body.is_empty() || body == "null" {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(body)?))
}
