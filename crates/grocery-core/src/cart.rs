//! # Cart Store
//!
//! The authoritative in-memory cart and its stock-aware mutations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  User Action              Operation               Cart Change           │
//! │  ───────────              ─────────               ───────────           │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_to_cart() ───────► push line / qty + 1   │
//! │                                                    (or OutOfStock)      │
//! │                                                                         │
//! │  "+" on checkout ────────► increase_quantity() ─► qty + 1 if ≤ stock    │
//! │                                                                         │
//! │  "-" on checkout ────────► decrease_quantity() ─► qty - 1, floor at 1   │
//! │                                                                         │
//! │  Decrement path ─────────► remove_from_cart() ──► qty - 1, gone at 0    │
//! │                                                                         │
//! │  "×" on checkout ────────► delete_from_cart() ──► line removed          │
//! │                                                                         │
//! │  Product card ───────────► get_available_stock() (read only)            │
//! │                                                                         │
//! │  NOTE: No operation fails. Declines are return values and unknown      │
//! │        product ids are no-ops.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{AddOutcome, CartLine, Product};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product increases quantity)
/// - Quantity is always ≥ 1 (a line reaching 0 is removed)
/// - Quantity never exceeds the product's `available` count
/// - Lines keep insertion order; mutations never reorder them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line holding `product_id`, if any.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    /// Units of `product_id` currently in the cart (0 when absent).
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// Stock ceiling left for `product`: `available - quantity in cart`.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::cart::Cart;
    /// # use grocery_core::{Money, Product};
    /// # let product = Product {
    /// #     id: "coke".into(), name: "Coca-Cola".into(), description: String::new(),
    /// #     category: "drinks".into(), price: Money::from_minor(100), available: 2,
    /// #     image: String::new(),
    /// # };
    ///
    /// let mut cart = Cart::new();
    /// assert_eq!(cart.get_available_stock(&product), 2);
    /// cart.add_to_cart(&product);
    /// assert_eq!(cart.get_available_stock(&product), 1);
    /// ```
    pub fn get_available_stock(&self, product: &Product) -> i64 {
        i64::from(product.available) - i64::from(self.quantity_of(&product.id))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// ```text
    /// available_stock = product.available - quantity in cart
    ///      │
    ///      ├── ≤ 0 ──────────────────────────► OutOfStock (no change)
    ///      │
    ///      ├── line exists ─► increase_quantity()
    ///      │                      ├── true ──► Increased
    ///      │                      └── false ─► OutOfStock (no change)
    ///      │
    ///      └── no line ─────► push qty 1 ────► Added
    /// ```
    ///
    /// The second decline branch only triggers when the caller passes a
    /// product whose `available` disagrees with the snapshot stored in the
    /// line; the stored snapshot wins.
    pub fn add_to_cart(&mut self, product: &Product) -> AddOutcome {
        if self.get_available_stock(product) <= 0 {
            return AddOutcome::OutOfStock;
        }

        if self.line(&product.id).is_some() {
            return if self.increase_quantity(&product.id) {
                AddOutcome::Increased
            } else {
                AddOutcome::OutOfStock
            };
        }

        self.lines.push(CartLine::new(product.clone()));
        AddOutcome::Added
    }

    /// Increases the line's quantity by one if the stock ceiling allows it.
    ///
    /// ## Returns
    /// `true` when the quantity changed. `false` when the ceiling is reached
    /// or the product is not in the cart; the caller decides whether to tell
    /// the user.
    pub fn increase_quantity(&mut self, product_id: &str) -> bool {
        let Some(line) = self.line_mut(product_id) else {
            return false;
        };

        let new_qty = line.quantity.saturating_add(1);
        if new_qty > line.product.available {
            return false;
        }

        line.quantity = new_qty;
        true
    }

    /// Decreases the line's quantity by one, never below 1.
    ///
    /// Use [`Cart::delete_from_cart`] to remove a line entirely.
    pub fn decrease_quantity(&mut self, product_id: &str) {
        if let Some(line) = self.line_mut(product_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        }
    }

    /// Decreases the line's quantity by one and drops the line at zero.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_sub(1);
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Removes the line regardless of its quantity.
    pub fn delete_from_cart(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id() != product_id);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id() == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
