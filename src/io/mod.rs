//! I/O module
//!
//! Handles the persisted JSON stores and tabular output.
//!
//! # Components
//!
//! - `json_format` - Transaction record shape (type tag stamping, conversion)
//! - `json_store` - Whole-file JSON collection store
//! - `csv_report` - CSV export of transaction listings

pub mod csv_report;
pub mod json_format;
pub mod json_store;

pub use csv_report::write_transactions_csv;
pub use json_format::TransactionRecord;
pub use json_store::JsonStore;
