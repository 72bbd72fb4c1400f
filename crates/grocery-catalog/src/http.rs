//! # HTTP Catalog
//!
//! GETs the configured endpoint and decodes the JSON array it returns.

use grocery_core::Product;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::source::ProductSource;
use crate::wire::decode_body;

/// Production catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str =
    "https://uxdlyqjm9i.execute-api.eu-west-1.amazonaws.com/s?category=all";

/// Catalog served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    /// Creates a catalog for `url` with a fresh client.
    pub fn new(url: impl Into<String>) -> Self {
        HttpCatalog {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        HttpCatalog::new(DEFAULT_CATALOG_URL)
    }
}

impl ProductSource for HttpCatalog {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        debug!(url = %self.url, "Fetching catalog");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Catalog response received");

        decode_body(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
