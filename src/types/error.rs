//! Error types for the fleet ledger
//!
//! This module defines all error types that can occur while managing the
//! vehicle catalog and the transaction ledger.
//!
//! # Error Categories
//!
//! Every concrete error belongs to one of three kinds (see [`ErrorKind`]):
//!
//! - **Invalid vehicle**: malformed VIN, vehicle missing from the catalog
//! - **Invalid transaction**: rejected activation, duplicate or unknown id,
//!   schedule/vehicle change on an active transaction
//! - **Invalid operation**: a store file cannot be opened, parsed, or written
//!
//! All errors are fatal to the calling operation. Validation runs before any
//! write, so a failed call leaves both the stores and the in-memory catalog
//! as they were.

use crate::types::transaction::TransactionId;
use std::path::Path;
use thiserror::Error;

/// Broad category of a [`FleetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidVehicle,
    InvalidTransaction,
    InvalidOperation,
}

/// Main error type for the fleet ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    /// VIN is not exactly 17 characters long
    #[error("VIN was {vin}, must be 17 characters long (got {length})")]
    InvalidVin {
        /// The rejected VIN
        vin: String,
        /// Its length in characters
        length: usize,
    },

    /// Vehicle is not in the catalog
    #[error("No vehicle with VIN {vin} in list of available vehicles")]
    VehicleNotFound {
        /// VIN that was looked up
        vin: String,
    },

    /// A single-vehicle file could not be read or parsed
    #[error("Failed to create vehicle from file {path}: {message}")]
    VehicleFileUnreadable {
        /// Path of the vehicle file
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Transaction references a vehicle that is not in the catalog
    #[error("Vehicle {vin} for transaction {tx} is not in the list of available vehicles")]
    VehicleUnavailable {
        /// Transaction ID
        tx: TransactionId,
        /// VIN of the referenced vehicle
        vin: String,
    },

    /// Activation preconditions failed
    #[error("Transaction with ID {tx} cannot be activated; must be before start date and in draft state")]
    ActivationRejected {
        /// Transaction ID
        tx: TransactionId,
    },

    /// A transaction with the same id is already persisted
    #[error("Transaction with ID {tx} already exists")]
    DuplicateTransaction {
        /// Transaction ID that is duplicated
        tx: TransactionId,
    },

    /// No persisted transaction has this id
    #[error("No transaction with ID {tx} was found for {operation}")]
    TransactionNotFound {
        /// Transaction ID that was not found
        tx: TransactionId,
        /// Operation that failed
        operation: String,
    },

    /// Start date or vehicle changed on a transaction that is already active
    #[error("Cannot update vehicle or start date for active transaction {tx}")]
    ActiveTransactionLocked {
        /// Transaction ID
        tx: TransactionId,
    },

    /// A variant-specific field was set on a different variant
    #[error("Field {field} does not apply to {tx_type} transaction {tx}")]
    FieldNotApplicable {
        /// Transaction ID
        tx: TransactionId,
        /// Field that was set
        field: String,
        /// Type tag of the transaction
        tx_type: String,
    },

    /// The price formula does not fit in a decimal
    #[error("Price of transaction {tx} for vehicle {vin} is out of range")]
    PriceOverflow {
        /// Transaction ID
        tx: TransactionId,
        /// VIN of the priced vehicle
        vin: String,
    },

    /// Store file could not be opened
    #[error("Unable to load {path}: {message}")]
    StoreUnavailable {
        /// Store path
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Store file content is not a valid collection
    #[error("Malformed store {path}: {message}")]
    MalformedStore {
        /// Store path
        path: String,
        /// Description of the parse failure
        message: String,
    },

    /// Store file could not be rewritten
    #[error("Unable to write {path}: {message}")]
    StoreWriteFailed {
        /// Store path
        path: String,
        /// Underlying failure
        message: String,
    },

    /// I/O error outside of a specific store
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for FleetError {
    fn from(error: std::io::Error) -> Self {
        FleetError::IoError {
            message: error.to_string(),
        }
    }
}

impl FleetError {
    /// The category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            FleetError::InvalidVin { .. }
            | FleetError::VehicleNotFound { .. }
            | FleetError::VehicleFileUnreadable { .. } => ErrorKind::InvalidVehicle,
            FleetError::VehicleUnavailable { .. }
            | FleetError::ActivationRejected { .. }
            | FleetError::DuplicateTransaction { .. }
            | FleetError::TransactionNotFound { .. }
            | FleetError::ActiveTransactionLocked { .. }
            | FleetError::FieldNotApplicable { .. }
            | FleetError::PriceOverflow { .. } => ErrorKind::InvalidTransaction,
            FleetError::StoreUnavailable { .. }
            | FleetError::MalformedStore { .. }
            | FleetError::StoreWriteFailed { .. }
            | FleetError::IoError { .. } => ErrorKind::InvalidOperation,
        }
    }
}

// Helper functions for creating common errors

impl FleetError {
    /// Create an InvalidVin error
    pub fn invalid_vin(vin: &str) -> Self {
        FleetError::InvalidVin {
            vin: vin.to_string(),
            length: vin.chars().count(),
        }
    }

    /// Create a VehicleNotFound error
    pub fn vehicle_not_found(vin: &str) -> Self {
        FleetError::VehicleNotFound {
            vin: vin.to_string(),
        }
    }

    /// Create a VehicleFileUnreadable error
    pub fn vehicle_file_unreadable(path: &Path, message: impl ToString) -> Self {
        FleetError::VehicleFileUnreadable {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a VehicleUnavailable error
    pub fn vehicle_unavailable(tx: TransactionId, vin: &str) -> Self {
        FleetError::VehicleUnavailable {
            tx,
            vin: vin.to_string(),
        }
    }

    /// Create an ActivationRejected error
    pub fn activation_rejected(tx: TransactionId) -> Self {
        FleetError::ActivationRejected { tx }
    }

    /// Create a DuplicateTransaction error
    pub fn duplicate_transaction(tx: TransactionId) -> Self {
        FleetError::DuplicateTransaction { tx }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(tx: TransactionId, operation: &str) -> Self {
        FleetError::TransactionNotFound {
            tx,
            operation: operation.to_string(),
        }
    }

    /// Create an ActiveTransactionLocked error
    pub fn active_transaction_locked(tx: TransactionId) -> Self {
        FleetError::ActiveTransactionLocked { tx }
    }

    /// Create a FieldNotApplicable error
    pub fn field_not_applicable(tx: TransactionId, field: &str, tx_type: &str) -> Self {
        FleetError::FieldNotApplicable {
            tx,
            field: field.to_string(),
            tx_type: tx_type.to_string(),
        }
    }

    /// Create a PriceOverflow error
    pub fn price_overflow(tx: TransactionId, vin: &str) -> Self {
        FleetError::PriceOverflow {
            tx,
            vin: vin.to_string(),
        }
    }

    /// Create a StoreUnavailable error
    pub fn store_unavailable(path: &Path, message: impl ToString) -> Self {
        FleetError::StoreUnavailable {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a MalformedStore error
    pub fn malformed_store(path: &Path, message: impl ToString) -> Self {
        FleetError::MalformedStore {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a StoreWriteFailed error
    pub fn store_write_failed(path: &Path, message: impl ToString) -> Self {
        FleetError::StoreWriteFailed {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}
