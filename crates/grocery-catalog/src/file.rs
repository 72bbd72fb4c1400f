//! # File Catalog
//!
//! Reads the endpoint's JSON array from disk, for offline use and fixtures.

use std::path::{Path, PathBuf};

use grocery_core::Product;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::source::ProductSource;
use crate::wire::decode_body;

/// Catalog stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCatalog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for FileCatalog {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        debug!(path = ?self.path, "Reading catalog file");

        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))?;

        decode_body(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
