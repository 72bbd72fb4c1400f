//! # Commands Module
//!
//! All commands exposed to the presentation layer. Each is a plain
//! function taking the state it needs and returning a serialisable
//! response (camelCase JSON).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── list_products, get_product, get_available_stock
//! ├── cart.rs      ◄─── get_cart, add/increase/decrease/remove/delete, clear
//! └── checkout.rs  ◄─── get_checkout, list_offers
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn get_product(catalog: &CatalogState, config: &ConfigState, id: &str)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState, config: &ConfigState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &mut CartState, ...)
//! ```

pub mod cart;
pub mod checkout;
pub mod product;

#[cfg(test)]
pub(crate) mod test_support {
    use grocery_core::{Money, Product};

    use crate::state::{CatalogState, ConfigState};

    fn product(id: &str, name: &str, category: &str, price: i64, available: u32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} from the test catalog", name),
            category: category.to_string(),
            price: Money::from_minor(price),
            available,
            image: format!("https://img.test/{}.png", id),
        }
    }

    pub fn catalog() -> CatalogState {
        CatalogState::with_products(vec![
            product("coke", "Coca-Cola", "drinks", 60, 30),
            product("croissant", "Croissants", "bakery", 150, 10),
            product("bananas", "Bananas", "fruit", 25, 8),
            product("water", "Still Water", "drinks", 45, 2),
        ])
    }

    pub fn config() -> ConfigState {
        ConfigState::default()
    }
}
