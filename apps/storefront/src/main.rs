//! # Grocery Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocery Storefront                               │
//! │                                                                         │
//! │  stdin ──► shell.rs ──► commands/ ──► grocery-core (cart, offers)      │
//! │                │                                                        │
//! │  stdout ◄── JSON responses + "! notice" lines                          │
//! │  stderr ◄── tracing logs                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    grocery_storefront::run().await
}
