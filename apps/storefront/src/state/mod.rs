//! # State Module
//!
//! Manages application state for the storefront.
//!
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type and commands take only what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  products    │  │  CartSession │  │  store name      │              │
//! │  │  load_failed │  │  session id  │  │  currency symbol │              │
//! │  │              │  │              │  │  catalog source  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • CatalogState: read-only after the startup fetch                     │
//! │  • CartState: mutated through &mut by one command at a time            │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::{CatalogSettings, ConfigState, StoreSettings};
