//! # grocery-catalog: Product Catalog Source
//!
//! Fetches the storefront's product list and adapts the endpoint's loose
//! JSON into typed [`grocery_core::Product`] values.
//!
//! ## Modules
//!
//! - [`source`] - `ProductSource` trait, `load_catalog`, configured source
//! - [`http`] - Catalog endpoint over HTTP (reqwest)
//! - [`file`] - Catalog fixture on disk
//! - [`wire`] - Wire record adapter (price sanitising, anomaly warnings)
//! - [`error`] - Catalog error types
//!
//! ## Usage
//! ```rust,no_run
//! use grocery_catalog::{load_catalog, HttpCatalog};
//!
//! # async fn demo() {
//! let load = load_catalog(&HttpCatalog::default()).await;
//! if load.failed {
//!     eprintln!("Failed to load products");
//! }
//! # }
//! ```

pub mod error;
pub mod file;
pub mod http;
pub mod source;
pub mod wire;

pub use error::{CatalogError, CatalogResult};
pub use file::FileCatalog;
pub use http::{HttpCatalog, DEFAULT_CATALOG_URL};
pub use source::{load_catalog, CatalogLoad, CatalogSource, ProductSource};
