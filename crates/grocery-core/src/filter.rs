//! # Product Filtering
//!
//! Pure projections over a loaded product list: category + text search,
//! and lookup by id. Cheap enough to run on every render.

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Categories offered by the storefront's category bar.
pub const CATEGORIES: [&str; 4] = [ALL_CATEGORIES, "drinks", "fruit", "bakery"];

/// Filters `products` by category and search term.
///
/// ## Rules
/// - `category` other than `"all"` keeps products whose category matches,
///   ignoring case; products without a category never match
/// - a non-empty `search_term` keeps products whose name or description
///   contains it, ignoring case
/// - both filters apply together; input order is kept
///
/// ## Example
/// ```rust
/// use grocery_core::filter::filter_products;
/// # use grocery_core::{Money, Product};
/// # let p = |id: &str, name: &str, cat: &str| Product {
/// #     id: id.into(), name: name.into(), description: String::new(),
/// #     category: cat.into(), price: Money::zero(), available: 1, image: String::new(),
/// # };
/// let products = vec![p("1", "Coca-Cola", "drinks"), p("2", "Bananas", "fruit")];
///
/// let drinks = filter_products(&products, "Drinks", "");
/// assert_eq!(drinks.len(), 1);
/// assert!(filter_products(&products, "all", "nan").iter().all(|p| p.id == "2"));
/// ```
pub fn filter_products(products: &[Product], category: &str, search_term: &str) -> Vec<Product> {
    let category = category.to_lowercase();
    let term = search_term.to_lowercase();

    products
        .iter()
        .filter(|p| {
            category == ALL_CATEGORIES
                || (p.has_category() && p.category.to_lowercase() == category)
        })
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Finds a product by id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> CoreResult<&'a Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, name: &str, description: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: Money::from_minor(100),
            available: 10,
            image: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Coca-Cola", "Classic soft drink", "drinks"),
            product("2", "Croissants", "Buttery french pastry", "bakery"),
            product("3", "Bananas", "Ripe and sweet", "fruit"),
            product("4", "Mystery Box", "Something sweet", ""),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_all_without_search_returns_everything() {
        assert_eq!(ids(&filter_products(&catalog(), "all", "")), ["1", "2", "3", "4"]);
        assert_eq!(ids(&filter_products(&catalog(), "ALL", "")).len(), 4);
    }

    #[test]
    fn test_category_match_ignores_case() {
        assert_eq!(ids(&filter_products(&catalog(), "Bakery", "")), ["2"]);
    }

    #[test]
    fn test_missing_category_only_listed_under_all() {
        for category in &CATEGORIES[1..] {
            let listed = filter_products(&catalog(), category, "");
            assert!(listed.iter().all(|p| p.id != "4"), "listed under {}", category);
        }
    }

    #[test]
    fn test_search_matches_name_or_description() {
        assert_eq!(ids(&filter_products(&catalog(), "all", "COLA")), ["1"]);
        assert_eq!(ids(&filter_products(&catalog(), "all", "sweet")), ["3", "4"]);
    }

    #[test]
    fn test_filters_compose() {
        assert_eq!(ids(&filter_products(&catalog(), "fruit", "sweet")), ["3"]);
        assert!(filter_products(&catalog(), "drinks", "pastry").is_empty());
    }

    #[test]
    fn test_find_product() {
        let products = catalog();
        assert_eq!(find_product(&products, "2").unwrap().name, "Croissants");
        assert!(matches!(
            find_product(&products, "99"),
            Err(CoreError::ProductNotFound(id)) if id == "99"
        ));
    }
}
