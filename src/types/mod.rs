//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `vehicle`: Vehicle catalog entries and vehicle categories
//! - `customer`: Customer contact records
//! - `transaction`: Buy/lease/rent transactions and their lifecycle
//! - `error`: Error types for the fleet ledger

pub mod customer;
pub mod error;
pub mod transaction;
pub mod vehicle;

pub use customer::{Address, Customer};
pub use error::{ErrorKind, FleetError};
pub use transaction::{Transaction, TransactionId, TransactionKind, TransactionState};
pub use vehicle::{Vehicle, VehicleType, VIN_LENGTH};
