//! # grocery-core: Cart & Promotions Engine
//!
//! The pure logic behind the grocery storefront: cart state transitions,
//! "buy N get 1 free" offers and checkout totals. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Grocery Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (storefront UI)                 │   │
//! │  │    Product grid ──► Cart badge ──► Checkout page ──► Toasts     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocery-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  offers   │  │ checkout  │  │  filter   │  │   │
//! │  │   │ CartStore │─►│ Evaluator │─►│  Totals   │  │ category  │  │   │
//! │  │   │  stock ⌈⌉ │  │ FreeItems │  │ sub/disc  │  │  search   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │            ▲ session: owns all of the above + notices           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO LOGGING • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲ Vec<Product>                           │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                grocery-catalog (HTTP / file source)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, FreeItem, AppliedOffers)
//! - [`money`] - Integer money and the catalog price sanitiser
//! - [`cart`] - Cart Store with stock-aware mutations
//! - [`offers`] - Offer rule table and evaluator
//! - [`checkout`] - Subtotal / discount / total
//! - [`filter`] - Category and text filtering
//! - [`notice`] - One-shot UI notices
//! - [`session`] - Owned session running the refresh cycle
//! - [`validation`] - Catalog field validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::{CartSession, Money, Product};
//!
//! let coke = Product {
//!     id: "coke".into(),
//!     name: "Coca-Cola".into(),
//!     description: "330ml can".into(),
//!     category: "drinks".into(),
//!     price: Money::from_minor(100),
//!     available: 24,
//!     image: String::new(),
//! };
//!
//! let mut session = CartSession::new();
//! for _ in 0..6 {
//!     session.add_to_cart(&coke);
//! }
//!
//! assert!(session.applied_offers().coke);
//! assert_eq!(session.free_items()[0].id, "free-coke-1");
//! assert_eq!(session.totals().total.to_string(), "6.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod filter;
pub mod money;
pub mod notice;
pub mod offers;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use checkout::CheckoutTotals;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notice::{Notice, NoticeLevel};
pub use offers::{OfferOutcome, OfferRule, OfferTracker, STANDARD_OFFERS};
pub use session::CartSession;
pub use types::*;
