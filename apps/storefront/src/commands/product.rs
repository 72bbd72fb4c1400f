//! # Product Commands
//!
//! Commands for browsing the loaded catalog.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Browse Flow                                  │
//! │                                                                         │
//! │  User picks "Drinks" and types "cola"                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(category: "drinks", search: "cola")                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_products over the in-memory catalog                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductListResponse { products, loadFailed }                          │
//! │                                                                         │
//! │  loadFailed = true  →  UI shows "Failed to load products"              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocery_core::filter::{filter_products, ALL_CATEGORIES, CATEGORIES};
use grocery_core::validation::validate_product_id;
use grocery_core::{Money, Product};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// Product DTO for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Money,
    /// Price with the currency symbol, e.g. "£0.60"
    pub price_label: String,
    pub available: u32,
    pub image: String,
}

impl ProductDto {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductDto {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price,
            price_label: config.format_currency(product.price),
            available: product.available,
            image: product.image.clone(),
        }
    }
}

/// Filtered product listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
    /// Categories for the category bar, "all" first
    pub categories: &'static [&'static str],
    /// True when the catalog fetch failed at startup
    pub load_failed: bool,
}

/// Stock still addable for one product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    pub product_id: String,
    /// Catalog stock minus the quantity already in the cart
    pub available: i64,
}

/// Lists products filtered by category and search text.
///
/// ## Arguments
/// * `category` - Category name, or `"all"` (default) for every product
/// * `search` - Case-insensitive substring of name or description, matched
///   as given
pub fn list_products(
    catalog: &CatalogState,
    config: &ConfigState,
    category: Option<&str>,
    search: Option<&str>,
) -> ProductListResponse {
    let category = category.unwrap_or(ALL_CATEGORIES);
    let search = search.unwrap_or_default();

    debug!(category = %category, search = %search, "list_products command");

    let products = filter_products(catalog.products(), category, search)
        .iter()
        .map(|p| ProductDto::new(p, config))
        .collect();

    ProductListResponse {
        products,
        categories: &CATEGORIES,
        load_failed: catalog.load_failed(),
    }
}

/// Gets a single product by id.
pub fn get_product(
    catalog: &CatalogState,
    config: &ConfigState,
    product_id: &str,
) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    validate_product_id(product_id)?;
    let product = catalog.product(product_id)?;
    Ok(ProductDto::new(product, config))
}

/// Gets how many more units of a product can go into the cart.
pub fn get_available_stock(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<StockResponse, ApiError> {
    debug!(product_id = %product_id, "get_available_stock command");

    let product = catalog.product(product_id)?;
    let available = cart.with_session(|s| s.get_available_stock(product));

    Ok(StockResponse {
        product_id: product.id.clone(),
        available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{catalog, config};
    use crate::error::ErrorCode;

    #[test]
    fn test_list_all_products() {
        let response = list_products(&catalog(), &config(), None, None);
        assert_eq!(response.products.len(), 4);
        assert!(!response.load_failed);
        assert_eq!(response.products[0].price_label, "£0.60");
        assert_eq!(response.categories[0], "all");
    }

    #[test]
    fn test_list_by_category_and_search() {
        let response = list_products(&catalog(), &config(), Some("bakery"), Some("CROIS"));
        let ids: Vec<&str> = response.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["croissant"]);
    }

    #[test]
    fn test_search_is_matched_verbatim() {
        let long = "x".repeat(101);
        let response = list_products(&catalog(), &config(), None, Some(&long));
        assert!(response.products.is_empty());

        let response = list_products(&catalog(), &config(), None, Some(" crois"));
        assert!(response.products.is_empty());

        let response = list_products(&catalog(), &config(), None, Some("still w"));
        assert_eq!(response.products[0].id, "water");
    }

    #[test]
    fn test_failed_catalog_lists_nothing_with_flag() {
        let failed = CatalogState::from(grocery_catalog::CatalogLoad::failed());
        let response = list_products(&failed, &config(), None, None);
        assert!(response.products.is_empty());
        assert!(response.load_failed);
    }

    #[test]
    fn test_get_product() {
        let dto = get_product(&catalog(), &config(), "coke").unwrap();
        assert_eq!(dto.name, "Coca-Cola");

        let err = get_product(&catalog(), &config(), "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = get_product(&catalog(), &config(), " ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_available_stock_accounts_for_cart() {
        let catalog = catalog();
        let mut cart = CartState::new();
        let coke = catalog.product("coke").unwrap().clone();
        cart.with_session_mut(|s| {
            s.add_to_cart(&coke);
            s.add_to_cart(&coke);
        });

        let stock = get_available_stock(&catalog, &cart, "coke").unwrap();
        assert_eq!(stock.available, i64::from(coke.available) - 2);
    }
}
