//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │    FreeItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │◄──│  product        │   │  id (synthetic) │       │
//! │  │  name           │   │  quantity ≥ 1   │   │  price = 0      │       │
//! │  │  category       │   │  added_at       │   │  offer          │       │
//! │  │  price, stock   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OfferKind     │   │ AppliedOffers   │   │   AddOutcome    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Coke           │   │  coke: bool     │   │  Added          │       │
//! │  │  Coffee         │   │  coffee: bool   │   │  Increased      │       │
//! │  └─────────────────┘   └─────────────────┘   │  OutOfStock     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Products are identified by the catalog's own string id. Free items get
//! synthetic ids (`free-coke-1`, …) that never collide with catalog ids in
//! practice and are never looked up in the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
///
/// Immutable for the lifetime of a session: stock is a client-local ceiling,
/// nothing is ever written back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, unique within a catalog load.
    pub id: String,

    /// Display name ("Coca-Cola", "Croissants", …).
    pub name: String,

    /// Free-text description, searched by the filter.
    pub description: String,

    /// Category ("drinks", "fruit", "bakery"). Empty when the catalog
    /// record had none.
    pub category: String,

    /// Unit price.
    pub price: Money,

    /// Units available for this session.
    pub available: u32,

    /// Opaque image reference.
    pub image: String,
}

impl Product {
    /// Returns true when the product carries a category.
    #[inline]
    pub fn has_category(&self) -> bool {
        !self.category.trim().is_empty()
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product held in the cart together with its quantity.
///
/// ## Invariants
/// - `quantity >= 1` (a line with zero units does not exist)
/// - `quantity <= product.available`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Snapshot of the product at the time it was first added.
    pub product: Product,

    /// Units in the cart.
    pub quantity: u32,

    /// When this line was created.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line with a single unit of `product`.
    pub fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Product id of this line.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    /// Units that can still be added before hitting the stock ceiling.
    #[inline]
    pub fn remaining_stock(&self) -> i64 {
        i64::from(self.product.available) - i64::from(self.quantity)
    }
}

// =============================================================================
// Offers
// =============================================================================

/// The promotions the storefront knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OfferKind {
    /// Buy 6 Coca-Cola, get 1 free.
    Coke,
    /// Buy 3 croissants, get a free coffee.
    Coffee,
}

impl OfferKind {
    /// Every known offer, in evaluation order.
    pub const ALL: [OfferKind; 2] = [OfferKind::Coke, OfferKind::Coffee];

    /// Wire name of the offer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OfferKind::Coke => "coke",
            OfferKind::Coffee => "coffee",
        }
    }
}

impl fmt::Display for OfferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which offers currently hold against the cart.
///
/// Always replaced wholesale by the offer evaluator, never patched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedOffers {
    pub coke: bool,
    pub coffee: bool,
}

impl AppliedOffers {
    /// Returns whether `kind` is applied.
    pub const fn is_applied(&self, kind: OfferKind) -> bool {
        match kind {
            OfferKind::Coke => self.coke,
            OfferKind::Coffee => self.coffee,
        }
    }

    /// Marks `kind` as applied.
    pub fn apply(&mut self, kind: OfferKind) {
        match kind {
            OfferKind::Coke => self.coke = true,
            OfferKind::Coffee => self.coffee = true,
        }
    }

    /// True when at least one offer holds.
    pub const fn any(&self) -> bool {
        self.coke || self.coffee
    }
}

/// A zero-priced bonus unit granted by an offer.
///
/// Shaped like a [`Product`] so the UI can render it next to cart lines,
/// but it has no quantity of its own: twelve cokes yield two `FreeItem`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FreeItem {
    /// Synthetic id (`free-coke-1`, `free-coffee-2`, …).
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Always zero for the current offers.
    pub price: Money,
    pub image: String,
    /// Always 1; kept so the record matches the product shape.
    pub available: u32,
    /// The offer that produced this item.
    pub offer: OfferKind,
}

// =============================================================================
// Add Outcome
// =============================================================================

/// Result of adding a product to the cart.
///
/// Declines are values, not errors: the caller decides how to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AddOutcome {
    /// A new line was created with quantity 1.
    Added,
    /// An existing line grew by one unit.
    Increased,
    /// The stock ceiling was already reached; nothing changed.
    OutOfStock,
}

impl AddOutcome {
    /// True when the cart changed.
    pub const fn changed(&self) -> bool {
        !matches!(self, AddOutcome::OutOfStock)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
