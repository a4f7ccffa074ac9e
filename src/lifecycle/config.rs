//! Locations of the backing record files.

use std::path::{Path, PathBuf};

/// Environment variable overriding [`DataConfig::orders_path`].
pub const ORDERS_PATH_VAR: &str = "ORDERS_CSV_PATH";
/// Environment variable overriding [`DataConfig::customers_path`].
pub const CUSTOMERS_PATH_VAR: &str = "CUSTOMERS_CSV_PATH";

const DEFAULT_DATA_DIR: &str = "./data";

/// Where the orders and customers files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub orders_path: PathBuf,
    pub customers_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl DataConfig {
    /// Both files, named `orders.csv` and `customers.csv`, inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            orders_path: dir.join("orders.csv"),
            customers_path: dir.join("customers.csv"),
        }
    }

    /// Defaults, with each path overridden by its environment variable when set
    /// to a non-empty value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = set(ORDERS_PATH_VAR) {
            config.orders_path = PathBuf::from(path);
        }
        if let Some(path) = set(CUSTOMERS_PATH_VAR) {
            config.customers_path = PathBuf::from(path);
        }
        config
    }
}
