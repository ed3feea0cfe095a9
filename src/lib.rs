//! Fleet Ledger Library
//! # Overview
//!
//! This library manages a small vehicle-transaction ledger: a catalog of
//! vehicles and a history of buy, lease and rent transactions against them,
//! both persisted as whole-file JSON stores.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Vehicle, Customer, Transaction, etc.)
//! - [`cli`] - CLI arguments parsing and command dispatch
//! - [`core`] - Business logic components:
//!   - [`core::manager`] - Validated mutations of the catalog and transactions
//!   - [`core::query`] - Conjunctive filters over the transaction store
//!   - [`core::config`] - Store locations
//! - [`io`] - JSON persistence and CSV export
//!
//! # Transaction Types
//!
//! - **Buy**: price is the vehicle price plus 5%, plus a warranty price
//! - **Lease**: price is 1% of the vehicle price per month
//! - **Rent**: price is the vehicle type's daily fee per day
//!
//! # Transaction States
//!
//! Every transaction starts as `DRAFT`. Activation moves it to `ACTIVE` and is
//! only allowed before the start date. Once active, its start date and vehicle
//! can no longer change, and it can only be cancelled before it starts.

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{CancelOutcome, StoreConfig, TransactionQuery, VehicleManager};
pub use io::{write_transactions_csv, JsonStore};
pub use types::{
    Address, Customer, ErrorKind, FleetError, Transaction, TransactionId, TransactionKind,
    TransactionState, Vehicle, VehicleType,
};
