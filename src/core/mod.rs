//! Core ledger logic
//!
//! - `config` - Store locations
//! - `query` - Filtered reads of the transaction store
//! - `manager` - Validated mutations of the catalog and the transaction store

pub mod config;
pub mod manager;
pub mod query;

pub use config::StoreConfig;
pub use manager::{CancelOutcome, VehicleManager};
pub use query::TransactionQuery;
