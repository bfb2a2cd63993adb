//! Store configuration.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (applied by the CLI on top of this)
//! 2. Environment variables (`ACERVUS_*`)
//! 3. Defaults (this file): `report.txt` and `sales_report.txt` in the
//!    working directory, currency label `PESOS`

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Default catalog file name.
pub const DEFAULT_CATALOG_FILE: &str = "report.txt";

/// Default ledger file name.
pub const DEFAULT_LEDGER_FILE: &str = "sales_report.txt";

/// Default currency label appended to totals.
pub const DEFAULT_CURRENCY: &str = "PESOS";

/// Where the store keeps its files and how totals are labelled.
///
/// ## Example
/// ```rust
/// use acervus_store::StoreConfig;
///
/// let config = StoreConfig::in_dir("/var/lib/acervus").currency("USD");
/// assert!(config.catalog_path.ends_with("report.txt"));
/// assert_eq!(config.currency, "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Catalog file (`name,quantity,date-added,price` lines).
    pub catalog_path: PathBuf,

    /// Ledger file (`name,quantity-sold,date-sold` lines).
    pub ledger_path: PathBuf,

    /// Label printed after monetary totals.
    pub currency: String,
}

impl StoreConfig {
    /// Creates a configuration with explicit file paths.
    pub fn new(catalog_path: impl Into<PathBuf>, ledger_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            catalog_path: catalog_path.into(),
            ledger_path: ledger_path.into(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig::new(dir.join(DEFAULT_CATALOG_FILE), dir.join(DEFAULT_LEDGER_FILE))
    }

    /// Sets the catalog file path.
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Sets the ledger file path.
    pub fn ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }

    /// Sets the currency label.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable               | Default                         |
    /// |------------------------|---------------------------------|
    /// | `ACERVUS_DATA_DIR`     | working directory               |
    /// | `ACERVUS_CATALOG_PATH` | `<data dir>/report.txt`         |
    /// | `ACERVUS_LEDGER_PATH`  | `<data dir>/sales_report.txt`   |
    /// | `ACERVUS_CURRENCY`     | `PESOS`                         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(ConfigError::InvalidValue(key.to_string()))
                }
                other => Ok(other),
            }
        };

        let mut config = match non_empty("ACERVUS_DATA_DIR")? {
            Some(dir) => StoreConfig::in_dir(dir),
            None => StoreConfig::default(),
        };

        if let Some(path) = non_empty("ACERVUS_CATALOG_PATH")? {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty("ACERVUS_LEDGER_PATH")? {
            config.ledger_path = PathBuf::from(path);
        }
        if let Some(currency) = non_empty("ACERVUS_CURRENCY")? {
            config.currency = currency;
        }

        Ok(config)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_CATALOG_FILE, DEFAULT_LEDGER_FILE)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
