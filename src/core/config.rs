//! Store locations
//!
//! The manager never reads paths from globals; it receives a [`StoreConfig`]
//! and opens exactly the files named there.

use std::path::{Path, PathBuf};

/// Default file name of the vehicle catalog store
pub const DEFAULT_VEHICLES_FILE: &str = "vehicles.json";

/// Default file name of the transaction store
pub const DEFAULT_TRANSACTIONS_FILE: &str = "transactions.json";

/// Locations of the two JSON stores
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Vehicle catalog store
    pub vehicles_path: PathBuf,
    /// Transaction store
    pub transactions_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            vehicles_path: PathBuf::from(DEFAULT_VEHICLES_FILE),
            transactions_path: PathBuf::from(DEFAULT_TRANSACTIONS_FILE),
        }
    }
}

impl StoreConfig {
    /// Create a StoreConfig with explicit paths
    pub fn new(vehicles_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        Self {
            vehicles_path: vehicles_path.into(),
            transactions_path: transactions_path.into(),
        }
    }

    /// Both stores under `dir`, with their default file names
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            vehicles_path: dir.join(DEFAULT_VEHICLES_FILE),
            transactions_path: dir.join(DEFAULT_TRANSACTIONS_FILE),
        }
    }
}
