//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --catalog-url / --catalog-file                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     GROCERY_STORE_NAME, GROCERY_CURRENCY_SYMBOL,                       │
//! │     GROCERY_CATALOG_URL, GROCERY_CATALOG_FILE                          │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or storefront.toml in the platform config dir     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     "Grocery Store", "£", production catalog endpoint                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [store]
//! name = "Corner Shop"
//! currency_symbol = "€"
//!
//! [catalog]
//! url = "https://catalog.example.com/s?category=all"
//! file = "fixtures/products.json"   # wins over url when set
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use grocery_catalog::{CatalogSource, DEFAULT_CATALOG_URL};
use grocery_core::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Store presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Store name shown in the shell banner and on checkout
    pub name: String,

    /// Currency symbol prefixed to amounts
    pub currency_symbol: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: "Grocery Store".to_string(),
            currency_symbol: "£".to_string(),
        }
    }
}

/// Where products come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog endpoint
    pub url: Option<String>,

    /// JSON fixture; takes precedence over `url`
    pub file: Option<PathBuf>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            url: Some(DEFAULT_CATALOG_URL.to_string()),
            file: None,
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl ConfigState {
    /// Loads configuration from file and environment on top of defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `config_path` when given (must exist), otherwise
    ///    the platform default path (skipped when absent)
    /// 3. Environment variables
    ///
    /// Command line overrides are applied by the caller, followed by
    /// [`ConfigState::validate`].
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses a TOML config file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Applies `GROCERY_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("GROCERY_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(symbol) = lookup("GROCERY_CURRENCY_SYMBOL") {
            self.store.currency_symbol = symbol;
        }

        if let Some(url) = lookup("GROCERY_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.url = Some(url);
        }

        if let Some(file) = lookup("GROCERY_CATALOG_FILE") {
            debug!(file = %file, "Overriding catalog file from environment");
            self.catalog.file = Some(PathBuf::from(file));
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".into(),
            ));
        }

        if let Some(ref url) = self.catalog.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "Catalog URL must start with http:// or https://, got: {}",
                    url
                )));
            }
        }

        Ok(())
    }

    /// The catalog source this configuration selects.
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_settings(self.catalog.url.as_deref(), self.catalog.file.clone())
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::Money;
    /// use grocery_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_minor(1234)), "£12.34");
    /// assert_eq!(config.format_currency(Money::from_minor(-5)), "-£0.05");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.store.currency_symbol,
            amount.major().abs(),
            amount.minor_part()
        )
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grocery", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
