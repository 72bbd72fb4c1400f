//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                        │
//! │  │  Cart    │     │          │     │  Page    │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart        get_checkout                       │
//! │                   increase/decrease  (checkout.rs)                      │
//! │                   remove/delete                                         │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every response carries the notices raised by the mutation (offer
//! applied, stock limit reached, out of stock). They are drained from the
//! session, so each one is delivered once.

use grocery_core::{
    AddOutcome, AppliedOffers, CartLine, CartSession, FreeItem, Money, Notice, NoticeLevel,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::commands::checkout::TotalsDto;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// A cart line for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
    pub line_total_label: String,
    /// Units still addable before hitting the stock ceiling
    pub remaining_stock: i64,
}

impl CartLineDto {
    pub fn new(line: &CartLine, config: &ConfigState) -> Self {
        CartLineDto {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            unit_price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total(),
            line_total_label: config.format_currency(line.line_total()),
            remaining_stock: line.remaining_stock(),
        }
    }
}

/// A notice ready for a toast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub level: NoticeLevel,
    pub message: String,
    pub event: Notice,
}

impl From<Notice> for NoticeDto {
    fn from(notice: Notice) -> Self {
        NoticeDto {
            level: notice.level(),
            message: notice.to_string(),
            event: notice,
        }
    }
}

/// Cart response including lines, offers and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineDto>,
    pub free_items: Vec<FreeItem>,
    pub applied_offers: AppliedOffers,
    pub totals: TotalsDto,
    pub notices: Vec<NoticeDto>,
    /// Set by `add_to_cart` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<AddOutcome>,
}

impl CartResponse {
    fn build(session: &CartSession, config: &ConfigState, notices: Vec<Notice>) -> Self {
        CartResponse {
            lines: session
                .lines()
                .iter()
                .map(|l| CartLineDto::new(l, config))
                .collect(),
            free_items: session.free_items().to_vec(),
            applied_offers: session.applied_offers(),
            totals: TotalsDto::new(session.totals(), config),
            notices: notices.into_iter().map(NoticeDto::from).collect(),
            outcome: None,
        }
    }
}

/// Runs a mutation, drains and logs its notices, and snapshots the cart.
fn mutate<F>(cart: &mut CartState, config: &ConfigState, f: F) -> CartResponse
where
    F: FnOnce(&mut CartSession),
{
    let session_id = cart.session_id();

    cart.with_session_mut(|s| {
        f(s);
        let notices = s.take_notices();
        for notice in &notices {
            match notice.level() {
                NoticeLevel::Info => info!(session = %session_id, "{}", notice),
                NoticeLevel::Error => warn!(session = %session_id, "{}", notice),
            }
        }
        CartResponse::build(s, config, notices)
    })
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!(session = %cart.session_id(), "get_cart command");
    cart.with_session(|s| CartResponse::build(s, config, Vec::new()))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Not in cart: new line with quantity 1 (`added`)
/// - Already in cart: quantity + 1 (`increased`)
/// - No stock left: nothing changes, `out-of-stock` plus a notice
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &mut CartState,
    config: &ConfigState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.product(product_id)?;

    let mut outcome = None;
    let mut response = mutate(cart, config, |s| outcome = Some(s.add_to_cart(product)));
    response.outcome = outcome;
    Ok(response)
}

/// Increases a line's quantity by one, up to the product's stock.
pub fn increase_quantity(cart: &mut CartState, config: &ConfigState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "increase_quantity command");
    mutate(cart, config, |s| {
        s.increase_quantity(product_id);
    })
}

/// Decreases a line's quantity by one, never below one.
pub fn decrease_quantity(cart: &mut CartState, config: &ConfigState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "decrease_quantity command");
    mutate(cart, config, |s| s.decrease_quantity(product_id))
}

/// Decreases a line's quantity by one, removing it at zero.
pub fn remove_from_cart(cart: &mut CartState, config: &ConfigState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    mutate(cart, config, |s| s.remove_from_cart(product_id))
}

/// Removes a line regardless of quantity.
pub fn delete_from_cart(cart: &mut CartState, config: &ConfigState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "delete_from_cart command");
    mutate(cart, config, |s| s.delete_from_cart(product_id))
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &mut CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");
    mutate(cart, config, |s| s.clear())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{catalog, config};
    use crate::error::ErrorCode;

    #[test]
    fn test_add_then_increase() {
        let (catalog, config) = (catalog(), config());
        let mut cart = CartState::new();

        let response = add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();
        assert_eq!(response.outcome, Some(AddOutcome::Added));

        let response = add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();
        assert_eq!(response.outcome, Some(AddOutcome::Increased));
        assert_eq!(response.lines[0].quantity, 2);
        assert_eq!(response.lines[0].line_total_label, "£1.20");
        assert_eq!(response.totals.total_quantity, 2);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut cart = CartState::new();
        let err = add_to_cart(&catalog(), &mut cart, &config(), "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart, &config()).lines.is_empty());
    }

    #[test]
    fn test_out_of_stock_notice() {
        let (catalog, config) = (catalog(), config());
        let mut cart = CartState::new();

        add_to_cart(&catalog, &mut cart, &config, "water").unwrap();
        add_to_cart(&catalog, &mut cart, &config, "water").unwrap();
        let response = add_to_cart(&catalog, &mut cart, &config, "water").unwrap();

        assert_eq!(response.outcome, Some(AddOutcome::OutOfStock));
        assert_eq!(response.lines[0].quantity, 2);
        assert_eq!(response.notices.len(), 1);
        assert_eq!(response.notices[0].level, NoticeLevel::Error);
        assert_eq!(response.notices[0].message, "Still Water is out of stock");
    }

    #[test]
    fn test_stock_limit_notice_on_increase() {
        let (catalog, config) = (catalog(), config());
        let mut cart = CartState::new();
        add_to_cart(&catalog, &mut cart, &config, "water").unwrap();

        assert!(increase_quantity(&mut cart, &config, "water").notices.is_empty());
        let response = increase_quantity(&mut cart, &config, "water");
        assert_eq!(response.lines[0].quantity, 2);
        assert_eq!(
            response.notices[0].message,
            "Cannot increase quantity of Still Water, stock limit reached"
        );
    }

    #[test]
    fn test_offer_notice_delivered_once() {
        let (catalog, config) = (catalog(), config());
        let mut cart = CartState::new();

        for _ in 0..5 {
            add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();
        }
        let response = add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();
        assert!(response.applied_offers.coke);
        assert_eq!(response.free_items[0].id, "free-coke-1");
        assert_eq!(response.notices[0].message, "Offer applied: Free Coca-Cola x1");
        assert_eq!(response.notices[0].level, NoticeLevel::Info);

        assert!(get_cart(&cart, &config).notices.is_empty());
        assert!(add_to_cart(&catalog, &mut cart, &config, "coke").unwrap().notices.is_empty());
    }

    #[test]
    fn test_decrease_remove_delete_clear() {
        let (catalog, config) = (catalog(), config());
        let mut cart = CartState::new();
        add_to_cart(&catalog, &mut cart, &config, "bananas").unwrap();
        add_to_cart(&catalog, &mut cart, &config, "bananas").unwrap();
        add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();

        let response = decrease_quantity(&mut cart, &config, "bananas");
        assert_eq!(response.lines[0].quantity, 1);
        let response = decrease_quantity(&mut cart, &config, "bananas");
        assert_eq!(response.lines[0].quantity, 1);

        let response = remove_from_cart(&mut cart, &config, "bananas");
        assert_eq!(response.lines.len(), 1);

        let response = delete_from_cart(&mut cart, &config, "coke");
        assert!(response.lines.is_empty());

        add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();
        let response = clear_cart(&mut cart, &config);
        assert!(response.lines.is_empty());
        assert_eq!(response.totals.total, Money::zero());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let (catalog, config) = (catalog(), config());
        let mut cart = CartState::new();
        let response = add_to_cart(&catalog, &mut cart, &config, "coke").unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["lines"][0]["productId"], "coke");
        assert_eq!(json["totals"]["subtotal"], 60);
        assert_eq!(json["outcome"], "added");
        assert!(json["appliedOffers"]["coke"] == false);
        assert!(serde_json::to_value(get_cart(&cart, &config)).unwrap().get("outcome").is_none());
    }
}
