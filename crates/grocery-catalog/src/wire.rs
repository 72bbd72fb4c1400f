//! # Wire Adapter
//!
//! Converts the catalog endpoint's JSON records into [`Product`]s.
//!
//! ## Record Shape
//! ```text
//! {
//!   "id": "7",                 string or number
//!   "name": "Coca-Cola",
//!   "description": "330ml",    optional, defaults to ""
//!   "type": "drinks",          optional, missing → kept with "" (warn)
//!   "price": "£1.20" | 1.2,    string sanitised by parse_price
//!   "available": 24,           optional, defaults to 0
//!   "img": "https://..."       optional, defaults to ""
//! }
//! ```
//!
//! A malformed record (wrong JSON shape, empty or duplicate id) is dropped
//! with a warning. Only a body that is not a JSON array fails
//! the whole decode.

use std::collections::HashSet;

use grocery_core::money::{parse_price, Money};
use grocery_core::validation::{
    validate_available, validate_category, validate_price, validate_product_id,
};
use grocery_core::Product;
use serde::Deserialize;
use tracing::warn;

use crate::error::CatalogResult;

// =============================================================================
// Wire Types
// =============================================================================

/// A product record as served by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProduct {
    pub id: WireScalar,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<WireScalar>,
    #[serde(default)]
    pub available: Option<f64>,
    #[serde(default)]
    pub img: String,
}

/// A field the endpoint sends either as a JSON string or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireScalar {
    Number(serde_json::Number),
    Text(String),
}

impl WireScalar {
    fn as_text(&self) -> String {
        match self {
            WireScalar::Number(n) => n.to_string(),
            WireScalar::Text(s) => s.trim().to_string(),
        }
    }

    fn as_price(&self) -> Money {
        match self {
            WireScalar::Number(n) => n.as_f64().map(Money::from_decimal).unwrap_or_default(),
            WireScalar::Text(s) => parse_price(s),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes a response body into products.
///
/// ## Errors
/// `CatalogError::Decode` when the body is not a JSON array.
pub fn decode_body(body: &[u8]) -> CatalogResult<Vec<Product>> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(body)?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<WireProduct>(value) {
            Ok(record) => records.push(record),
            Err(e) => warn!(index, error = %e, "Dropping malformed catalog record"),
        }
    }

    Ok(decode_products(records))
}

/// Converts wire records into products, keeping input order.
pub fn decode_products(records: Vec<WireProduct>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id.as_text();

        if let Err(e) = validate_product_id(&id) {
            warn!(id = %id, error = %e, "Dropping catalog record with invalid id");
            continue;
        }
        if !seen.insert(id.clone()) {
            warn!(id = %id, "Dropping duplicate catalog record");
            continue;
        }

        products.push(into_product(id, record));
    }

    products
}

fn into_product(id: String, record: WireProduct) -> Product {
    let category = match validate_category(record.category.as_deref()) {
        Ok(()) => record.category.unwrap_or_default().trim().to_string(),
        Err(_) => {
            warn!(id = %id, name = %record.name, "Product has no category, listing under all only");
            String::new()
        }
    };

    let mut price = record.price.as_ref().map(WireScalar::as_price).unwrap_or_default();
    if validate_price(price).is_err() {
        warn!(id = %id, price = %price, "Negative catalog price clamped to 0");
        price = Money::zero();
    }

    Product {
        available: stock_of(&id, record.available),
        id,
        name: record.name.trim().to_string(),
        description: record.description,
        category,
        price,
        image: record.img,
    }
}

fn stock_of(id: &str, available: Option<f64>) -> u32 {
    let raw = available.filter(|n| n.is_finite()).unwrap_or(0.0).floor();

    // `as` saturates, so anything past u32::MAX still fails validation below.
    match validate_available(raw as i64) {
        Ok(stock) => stock,
        Err(_) if raw < 0.0 => {
            warn!(id = %id, available = raw, "Negative stock clamped to 0");
            0
        }
        Err(_) => {
            warn!(id = %id, available = raw, "Stock count clamped to u32::MAX");
            u32::MAX
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
