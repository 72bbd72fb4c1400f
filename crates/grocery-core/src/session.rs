//! # Cart Session
//!
//! The explicitly owned state object tying the cart, offers and totals
//! together.
//!
//! ## Refresh Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Every Committed Mutation                             │
//! │                                                                         │
//! │  session.add_to_cart(&product)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart Store mutation ───────────────► AddOutcome / bool                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  refresh()                                                              │
//! │   ├── evaluate_offers(lines)    → OfferOutcome  (replaces old one)     │
//! │   ├── CheckoutTotals::calculate → CheckoutTotals (replaces old one)    │
//! │   └── OfferTracker::observe     → Notice::OfferApplied (transitions)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI reads lines / offers / totals, drains take_notices()               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No subscription machinery: the recompute is a plain function call made
//! by each mutator, so a session can be driven and asserted on in tests
//! without any UI.

use crate::cart::Cart;
use crate::checkout::CheckoutTotals;
use crate::notice::Notice;
use crate::offers::{evaluate_offers, OfferOutcome, OfferTracker};
use crate::types::{AddOutcome, AppliedOffers, CartLine, FreeItem, Product};

/// Cart + derived offer state + pending notices.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    cart: Cart,
    offers: OfferOutcome,
    totals: CheckoutTotals,
    tracker: OfferTracker,
    notices: Vec<Notice>,
}

impl CartSession {
    /// Creates a session with an empty cart.
    pub fn new() -> Self {
        CartSession::default()
    }

    // =========================================================================
    // Read Side
    // =========================================================================

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Free items granted by the current cart.
    pub fn free_items(&self) -> &[FreeItem] {
        &self.offers.free_items
    }

    /// Offers holding against the current cart.
    pub fn applied_offers(&self) -> AppliedOffers {
        self.offers.applied
    }

    /// Latest offer evaluation.
    pub fn offers(&self) -> &OfferOutcome {
        &self.offers
    }

    /// Latest checkout totals.
    pub fn totals(&self) -> CheckoutTotals {
        self.totals
    }

    /// Stock ceiling left for `product`.
    pub fn get_available_stock(&self, product: &Product) -> i64 {
        self.cart.get_available_stock(product)
    }

    /// Notices not yet delivered.
    pub fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains pending notices; each notice is delivered exactly once.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// See [`Cart::add_to_cart`]. Queues `Notice::OutOfStock` on decline.
    pub fn add_to_cart(&mut self, product: &Product) -> AddOutcome {
        let outcome = self.cart.add_to_cart(product);

        if outcome.changed() {
            self.refresh();
        } else {
            self.notices.push(Notice::OutOfStock {
                product_id: product.id.clone(),
                name: product.name.clone(),
            });
        }

        outcome
    }

    /// See [`Cart::increase_quantity`]. Queues `Notice::StockLimitReached`
    /// when a line exists but is at its ceiling.
    pub fn increase_quantity(&mut self, product_id: &str) -> bool {
        if self.cart.increase_quantity(product_id) {
            self.refresh();
            return true;
        }

        if let Some(line) = self.cart.line(product_id) {
            self.notices.push(Notice::StockLimitReached {
                product_id: product_id.to_string(),
                name: line.product.name.clone(),
            });
        }
        false
    }

    /// See [`Cart::decrease_quantity`].
    pub fn decrease_quantity(&mut self, product_id: &str) {
        self.cart.decrease_quantity(product_id);
        self.refresh();
    }

    /// See [`Cart::remove_from_cart`].
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove_from_cart(product_id);
        self.refresh();
    }

    /// See [`Cart::delete_from_cart`].
    pub fn delete_from_cart(&mut self, product_id: &str) {
        self.cart.delete_from_cart(product_id);
        self.refresh();
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.refresh();
    }

    /// Recomputes offers and totals from the current cart.
    fn refresh(&mut self) {
        self.offers = evaluate_offers(self.cart.lines());
        self.totals = CheckoutTotals::calculate(self.cart.lines(), &self.offers.free_items);

        let activated = self.tracker.observe(&self.offers);
        self.notices.extend(activated);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::OfferKind;

    fn product(id: &str, name: &str, price_minor: i64, available: u32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "drinks".to_string(),
            price: Money::from_minor(price_minor),
            available,
            image: String::new(),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = CartSession::new();
        assert!(session.lines().is_empty());
        assert!(session.free_items().is_empty());
        assert_eq!(session.totals(), CheckoutTotals::default());
        assert!(session.pending_notices().is_empty());
    }

    #[test]
    fn test_extreme_catalog_price_does_not_overflow_totals() {
        let mut session = CartSession::new();
        let mut gold = product("gold", "Gold Bar", 0, 5);
        gold.price = crate::money::parse_price("£90000000000000000");

        assert_eq!(session.add_to_cart(&gold), AddOutcome::Added);
        assert_eq!(session.add_to_cart(&gold), AddOutcome::Increased);
        assert_eq!(session.totals().subtotal.minor(), i64::MAX);
        assert_eq!(session.totals().total.minor(), i64::MAX);
    }

    #[test]
    fn test_six_cokes_apply_offer_once() {
        let mut session = CartSession::new();
        let coke = product("coke", "Coca-Cola", 100, 24);

        for _ in 0..5 {
            session.add_to_cart(&coke);
        }
        assert!(!session.applied_offers().coke);
        assert!(session.take_notices().is_empty());

        session.add_to_cart(&coke);
        assert!(session.applied_offers().coke);
        assert_eq!(session.free_items().len(), 1);
        assert_eq!(session.totals().subtotal.minor(), 600);
        assert_eq!(session.totals().total.minor(), 600);

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].to_string(), "Offer applied: Free Coca-Cola x1");

        // Staying active does not re-notify.
        for _ in 0..6 {
            session.add_to_cart(&coke);
        }
        assert_eq!(session.free_items().len(), 2);
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn test_offer_rearms_after_dropping_below_threshold() {
        let mut session = CartSession::new();
        let croissants = product("cr", "Croissants", 250, 10);
        for _ in 0..3 {
            session.add_to_cart(&croissants);
        }
        assert_eq!(session.take_notices().len(), 1);

        session.remove_from_cart("cr");
        assert!(!session.applied_offers().coffee);
        assert!(session.free_items().is_empty());

        session.increase_quantity("cr");
        let notices = session.take_notices();
        assert!(matches!(
            notices.as_slice(),
            [Notice::OfferApplied { offer: OfferKind::Coffee, free_count: 1, .. }]
        ));
    }

    #[test]
    fn test_out_of_stock_queues_notice() {
        let mut session = CartSession::new();
        let last_one = product("p", "Pears", 80, 1);

        assert_eq!(session.add_to_cart(&last_one), AddOutcome::Added);
        assert_eq!(session.add_to_cart(&last_one), AddOutcome::OutOfStock);

        assert_eq!(
            session.take_notices(),
            vec![Notice::OutOfStock {
                product_id: "p".to_string(),
                name: "Pears".to_string(),
            }]
        );
        assert_eq!(session.cart().quantity_of("p"), 1);
    }

    #[test]
    fn test_stock_limit_notice_only_for_existing_lines() {
        let mut session = CartSession::new();
        session.add_to_cart(&product("p", "Pears", 80, 1));

        assert!(!session.increase_quantity("p"));
        assert!(!session.increase_quantity("ghost"));

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(matches!(&notices[0], Notice::StockLimitReached { name, .. } if name == "Pears"));
    }

    #[test]
    fn test_delete_and_clear_reset_derived_state() {
        let mut session = CartSession::new();
        let coke = product("coke", "Coca-Cola", 100, 24);
        for _ in 0..6 {
            session.add_to_cart(&coke);
        }
        session.add_to_cart(&product("w", "Water", 50, 5));

        session.delete_from_cart("coke");
        assert!(!session.applied_offers().any());
        assert_eq!(session.totals().subtotal.minor(), 50);

        session.clear();
        assert!(session.lines().is_empty());
        assert_eq!(session.totals(), CheckoutTotals::default());
    }

    #[test]
    fn test_decrease_keeps_line_and_updates_totals() {
        let mut session = CartSession::new();
        let water = product("w", "Water", 50, 5);
        session.add_to_cart(&water);
        session.add_to_cart(&water);

        session.decrease_quantity("w");
        session.decrease_quantity("w");
        assert_eq!(session.cart().quantity_of("w"), 1);
        assert_eq!(session.totals().subtotal.minor(), 50);
        assert_eq!(session.get_available_stock(&water), 4);
    }
}
