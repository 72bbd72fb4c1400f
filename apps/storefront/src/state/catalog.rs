//! # Catalog State
//!
//! The product list fetched once at startup. Immutable for the rest of
//! the session.

use grocery_catalog::{load_catalog, CatalogLoad, ProductSource};
use grocery_core::filter::find_product;
use grocery_core::{CoreResult, Product};

/// Loaded products plus the load-failure flag.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    load_failed: bool,
}

impl CatalogState {
    /// Fetches from `source`; a failed fetch leaves the catalog empty and
    /// sets [`CatalogState::load_failed`].
    pub async fn load<S: ProductSource>(source: &S) -> Self {
        CatalogState::from(load_catalog(source).await)
    }

    /// A catalog holding `products`, for tests and fixtures.
    pub fn with_products(products: Vec<Product>) -> Self {
        CatalogState {
            products,
            load_failed: false,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// True when the fetch failed ("Failed to load products").
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> CoreResult<&Product> {
        find_product(&self.products, id)
    }
}

impl From<CatalogLoad> for CatalogState {
    fn from(load: CatalogLoad) -> Self {
        CatalogState {
            products: load.products,
            load_failed: load.failed,
        }
    }
}
