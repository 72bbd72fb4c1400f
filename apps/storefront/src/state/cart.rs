//! # Cart State
//!
//! Owns the shopping session for one storefront run.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Session Change        │
//! │  ───────────              ───────                 ──────────────        │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► line pushed / +1     │
//! │                                                                         │
//! │  + / - buttons ──────────► increase_quantity() ─► qty + 1 (≤ stock)    │
//! │                           decrease_quantity() ─► qty - 1 (≥ 1)        │
//! │                                                                         │
//! │  Remove one ─────────────► remove_from_cart() ──► qty - 1, drop at 0   │
//! │                                                                         │
//! │  Bin icon ───────────────► delete_from_cart() ──► line removed         │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  Every write re-runs offers + totals before the command returns.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The shell drives commands one at a time and holds the state by value,
//! so writes take `&mut self` and no lock is involved.

use grocery_core::CartSession;
use uuid::Uuid;

/// The current shopping session.
#[derive(Debug, Clone)]
pub struct CartState {
    session_id: Uuid,
    session: CartSession,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            session_id: Uuid::new_v4(),
            session: CartSession::new(),
        }
    }

    /// Identifier attached to log lines for this session.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        f(&self.session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut CartSession) -> R,
    {
        f(&mut self.session)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
