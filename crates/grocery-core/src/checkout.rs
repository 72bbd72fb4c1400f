//! # Checkout Calculator
//!
//! Pure derivation of the order summary from cart lines and offer output.
//!
//! ```text
//! subtotal = Σ lines       (unit price × quantity)
//! discount = Σ free items  (price)
//! total    = subtotal - discount
//! ```
//!
//! Free items are zero-priced today, so the discount is structurally zero;
//! it is still summed so a future offer granting a priced item only has to
//! change the offer table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLine, FreeItem};

/// Order summary shown on the checkout page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutTotals {
    pub line_count: usize,
    pub total_quantity: u64,
    pub free_item_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl CheckoutTotals {
    /// Computes the summary. Amounts are exact; rounding to two decimals is
    /// a display concern.
    pub fn calculate(lines: &[CartLine], free_items: &[FreeItem]) -> Self {
        let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
        let discount: Money = free_items.iter().map(|i| i.price).sum();

        CheckoutTotals {
            line_count: lines.len(),
            total_quantity: lines.iter().map(|l| u64::from(l.quantity)).sum(),
            free_item_count: free_items.len(),
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offers::evaluate_offers;
    use crate::types::Product;

    fn line(name: &str, price_minor: i64, quantity: u32) -> CartLine {
        let mut line = CartLine::new(Product {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            category: String::new(),
            price: Money::from_minor(price_minor),
            available: 50,
            image: String::new(),
        });
        line.quantity = quantity;
        line
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = CheckoutTotals::calculate(&[], &[]);
        assert_eq!(totals, CheckoutTotals::default());
    }

    #[test]
    fn test_six_cokes() {
        let lines = [line("Coca-Cola", 100, 6)];
        let offers = evaluate_offers(&lines);
        let totals = CheckoutTotals::calculate(&lines, &offers.free_items);

        assert_eq!(totals.subtotal.to_string(), "6.00");
        assert_eq!(totals.discount.to_string(), "0.00");
        assert_eq!(totals.total.to_string(), "6.00");
        assert_eq!(totals.free_item_count, 1);
        assert!(offers.applied.coke);
    }

    #[test]
    fn test_croissants_with_another_item() {
        let lines = [line("Croissants", 250, 3), line("Olive Oil", 500, 1)];
        let offers = evaluate_offers(&lines);
        let totals = CheckoutTotals::calculate(&lines, &offers.free_items);

        assert_eq!(totals.subtotal.minor(), 1250);
        assert_eq!(totals.discount.minor(), 0);
        assert_eq!(totals.total.minor(), 1250);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 4);
        assert_eq!(offers.free_items.len(), 1);
        assert_eq!(offers.free_items[0].name, "Free Coffee");
        assert!(offers.applied.coffee);
    }

    #[test]
    fn test_priced_free_items_are_discounted() {
        let lines = [line("Coca-Cola", 100, 6)];
        let mut free_items = evaluate_offers(&lines).free_items;
        free_items[0].price = Money::from_minor(100);

        let totals = CheckoutTotals::calculate(&lines, &free_items);
        assert_eq!(totals.discount.minor(), 100);
        assert_eq!(totals.total.minor(), 500);
    }

    #[test]
    fn test_total_is_subtotal_minus_discount() {
        for qty in 1..30 {
            let lines = [line("Coca-Cola", 133, qty), line("Croissants", 77, qty)];
            let offers = evaluate_offers(&lines);
            let totals = CheckoutTotals::calculate(&lines, &offers.free_items);
            assert_eq!(totals.subtotal - totals.discount, totals.total);
        }
    }
}
