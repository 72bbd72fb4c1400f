//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / io::Error / serde_json::Error                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context (url, path, status)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_catalog() ← logs it, returns empty list + failed flag            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Storefront shows "Failed to load products"                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog fetch failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Catalog endpoint {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not a JSON array of products.
    #[error("Catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// Fixture file could not be read.
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No URL or file was configured.
    #[error("No catalog source configured")]
    NotConfigured,
}

impl CatalogError {
    /// Creates an Io error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
