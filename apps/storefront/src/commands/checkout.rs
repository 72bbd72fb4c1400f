//! # Checkout Commands
//!
//! Read-only views over the session: the checkout summary and the offer
//! catalogue.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Grocery Store · Checkout                                               │
//! │  ───────────────────────────────────────────────────────────────────    │
//! │  Coca-Cola                 x6                          £3.60            │
//! │  Free Coca-Cola            x1  (Buy 6 cans ... get 1 free)  £0.00       │
//! │  ───────────────────────────────────────────────────────────────────    │
//! │  Subtotal                                              £3.60            │
//! │  Discount                                              £0.00            │
//! │  TOTAL                                                 £3.60            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocery_core::offers::{rule_for, STANDARD_OFFERS};
use grocery_core::{CheckoutTotals, FreeItem, Money, OfferKind};
use serde::Serialize;
use tracing::debug;

use crate::commands::cart::CartLineDto;
use crate::state::{CartState, ConfigState};

/// Totals with display labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDto {
    pub line_count: usize,
    pub total_quantity: u64,
    pub free_item_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    pub subtotal_label: String,
    pub discount_label: String,
    pub total_label: String,
}

impl TotalsDto {
    pub fn new(totals: CheckoutTotals, config: &ConfigState) -> Self {
        TotalsDto {
            line_count: totals.line_count,
            total_quantity: totals.total_quantity,
            free_item_count: totals.free_item_count,
            subtotal: totals.subtotal,
            discount: totals.discount,
            total: totals.total,
            subtotal_label: config.format_currency(totals.subtotal),
            discount_label: config.format_currency(totals.discount),
            total_label: config.format_currency(totals.total),
        }
    }
}

/// A free item as listed on the checkout page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeItemDto {
    #[serde(flatten)]
    pub item: FreeItem,
    /// Promotion text, e.g. "Buy 3 croissants, get a free coffee"
    pub offer_text: &'static str,
}

impl From<&FreeItem> for FreeItemDto {
    fn from(item: &FreeItem) -> Self {
        FreeItemDto {
            item: item.clone(),
            offer_text: rule_for(item.offer).offer_text,
        }
    }
}

/// Checkout page contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub store_name: String,
    pub lines: Vec<CartLineDto>,
    pub free_items: Vec<FreeItemDto>,
    pub totals: TotalsDto,
}

/// One entry of the offer catalogue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    pub kind: OfferKind,
    pub offer_text: &'static str,
    pub trigger_name: &'static str,
    pub threshold: u32,
    pub free_item_name: &'static str,
    /// Whether the offer holds against the current cart
    pub active: bool,
    /// Free items currently granted by this offer
    pub free_count: usize,
}

/// Gets the checkout summary for the current cart.
pub fn get_checkout(cart: &CartState, config: &ConfigState) -> CheckoutResponse {
    debug!(session = %cart.session_id(), "get_checkout command");

    cart.with_session(|s| CheckoutResponse {
        store_name: config.store.name.clone(),
        lines: s.lines().iter().map(|l| CartLineDto::new(l, config)).collect(),
        free_items: s.free_items().iter().map(FreeItemDto::from).collect(),
        totals: TotalsDto::new(s.totals(), config),
    })
}

/// Lists every offer with its state against the current cart.
pub fn list_offers(cart: &CartState) -> Vec<OfferDto> {
    debug!("list_offers command");

    cart.with_session(|s| {
        STANDARD_OFFERS
            .iter()
            .map(|rule| OfferDto {
                kind: rule.kind,
                offer_text: rule.offer_text,
                trigger_name: rule.trigger_name,
                threshold: rule.threshold,
                free_item_name: rule.free_item_name,
                active: s.applied_offers().is_applied(rule.kind),
                free_count: s.offers().free_count(rule.kind),
            })
            .collect()
    })
}
