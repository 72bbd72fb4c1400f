//! # Product Sources
//!
//! The [`ProductSource`] trait is the seam between the storefront and
//! wherever products come from. [`load_catalog`] is the only entry point
//! the app uses: it never fails.
//!
//! ```text
//! ┌──────────────┐   fetch_products()   ┌────────────────────────────────┐
//! │ HttpCatalog  │─────────────────────►│ Ok(products)  → CatalogLoad    │
//! │ FileCatalog  │                      │                 { failed: no } │
//! │ CatalogSource│                      │ Err(e)  → warn → CatalogLoad   │
//! └──────────────┘                      │            { [], failed: yes } │
//!                                       └────────────────────────────────┘
//! ```

use std::future::Future;
use std::path::PathBuf;

use grocery_core::Product;
use tracing::{info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::file::FileCatalog;
use crate::http::HttpCatalog;

/// Something that can produce the product list.
///
/// One request, one response: no retry, no timeout, no cancellation.
pub trait ProductSource {
    /// Fetches every product the source knows about.
    fn fetch_products(&self) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Result of a catalog load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogLoad {
    pub products: Vec<Product>,
    /// Set when the fetch failed; `products` is then empty.
    pub failed: bool,
}

impl CatalogLoad {
    /// A successful load.
    pub fn loaded(products: Vec<Product>) -> Self {
        CatalogLoad {
            products,
            failed: false,
        }
    }

    /// A failed load: empty list plus the error flag.
    pub fn failed() -> Self {
        CatalogLoad {
            products: Vec::new(),
            failed: true,
        }
    }
}

/// Fetches from `source`, turning any failure into an empty list plus
/// the `failed` flag.
pub async fn load_catalog<S: ProductSource>(source: &S) -> CatalogLoad {
    let location = source.describe();

    match source.fetch_products().await {
        Ok(products) => {
            info!(source = %location, count = products.len(), "Catalog loaded");
            CatalogLoad::loaded(products)
        }
        Err(e) => {
            warn!(source = %location, error = %e, "Failed to load catalog");
            CatalogLoad::failed()
        }
    }
}

// =============================================================================
// Configured Source
// =============================================================================

/// The source picked from configuration.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Http(HttpCatalog),
    File(FileCatalog),
    /// Nothing configured; every fetch fails with `NotConfigured`.
    Unconfigured,
}

impl CatalogSource {
    /// Picks a source: a configured file wins over the URL.
    pub fn from_settings(url: Option<&str>, file: Option<PathBuf>) -> Self {
        match (file, url.map(str::trim).filter(|u| !u.is_empty())) {
            (Some(path), _) => CatalogSource::File(FileCatalog::new(path)),
            (None, Some(url)) => CatalogSource::Http(HttpCatalog::new(url)),
            (None, None) => CatalogSource::Unconfigured,
        }
    }
}

impl ProductSource for CatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        match self {
            CatalogSource::Http(http) => http.fetch_products().await,
            CatalogSource::File(file) => file.fetch_products().await,
            CatalogSource::Unconfigured => Err(CatalogError::NotConfigured),
        }
    }

    fn describe(&self) -> String {
        match self {
            CatalogSource::Http(http) => http.describe(),
            CatalogSource::File(file) => file.describe(),
            CatalogSource::Unconfigured => "none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::Money;

    struct FixedSource(Vec<Product>);

    impl ProductSource for FixedSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    struct BrokenSource;

    impl ProductSource for BrokenSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::Status {
                url: "https://example.test".to_string(),
                status: 500,
            })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_catalog_success() {
        let apple = Product {
            id: "1".to_string(),
            name: "Apples".to_string(),
            description: String::new(),
            category: "fruit".to_string(),
            price: Money::from_minor(30),
            available: 9,
            image: String::new(),
        };

        let load = load_catalog(&FixedSource(vec![apple.clone()])).await;
        assert!(!load.failed);
        assert_eq!(load.products, vec![apple]);
    }

    #[tokio::test]
    async fn test_load_catalog_failure_yields_empty_and_flag() {
        let load = load_catalog(&BrokenSource).await;
        assert_eq!(load, CatalogLoad::failed());
        assert!(load.products.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_source_fails() {
        let source = CatalogSource::from_settings(Some("  "), None);
        assert!(matches!(source, CatalogSource::Unconfigured));
        assert!(matches!(
            source.fetch_products().await,
            Err(CatalogError::NotConfigured)
        ));
        assert!(load_catalog(&source).await.failed);
    }

    #[test]
    fn test_file_wins_over_url() {
        let source = CatalogSource::from_settings(
            Some("https://example.test/s"),
            Some(PathBuf::from("products.json")),
        );
        assert!(matches!(source, CatalogSource::File(_)));

        let source = CatalogSource::from_settings(Some("https://example.test/s"), None);
        assert_eq!(source.describe(), "https://example.test/s");
    }
}
