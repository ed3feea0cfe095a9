//! JSON record format for persisted transactions
//!
//! This module centralizes the on-disk shape of a transaction:
//! - `TransactionRecord` structure for (de)serialization
//! - Conversion from a domain [`Transaction`] (stamps the type tag)
//! - Conversion to a domain [`Transaction`] (dispatches on the type tag)
//!
//! The type tag is written from the variant on every encode and is the only
//! thing consulted on decode; it is never inferred from which optional field
//! happens to be present. All functions are pure (no I/O).

use crate::types::{
    Customer, Transaction, TransactionId, TransactionKind, TransactionState, Vehicle,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persisted transaction shape
///
/// Matches one element of the transaction store: common fields, the `type`
/// tag, and exactly one of `warrantyPrice`, `months`, `days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub state: TransactionState,
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub price: Decimal,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub activation_date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

impl From<Transaction> for TransactionRecord {
    fn from(transaction: Transaction) -> Self {
        let kind = transaction.kind();
        let (warranty_price, months, days) = match kind {
            TransactionKind::Buy { warranty_price } => (Some(warranty_price), None, None),
            TransactionKind::Lease { months } => (None, Some(months), None),
            TransactionKind::Rent { days } => (None, None, Some(days)),
        };

        TransactionRecord {
            id: transaction.id(),
            state: transaction.state(),
            customer: transaction.customer().clone(),
            vehicle: transaction.vehicle().clone(),
            price: transaction.price(),
            start_date: transaction.start_date(),
            activation_date: transaction.activation_date(),
            tx_type: kind.tag().to_string(),
            warranty_price,
            months,
            days,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = String;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let kind = convert_kind(&record)?;

        Transaction::restore(
            record.id,
            record.state,
            record.customer,
            record.vehicle,
            record.start_date,
            record.activation_date,
            kind,
        )
        .map_err(|e| e.to_string())
    }
}

/// Resolve the variant of a record from its type tag
///
/// # Returns
///
/// - Ok(TransactionKind) - the variant with its variant-specific field
/// - Err(String) - unknown tag, or the tag's field is missing
pub fn convert_kind(record: &TransactionRecord) -> Result<TransactionKind, String> {
    let missing = |field: &str| {
        format!(
            "{} transaction {} requires {}",
            record.tx_type, record.id, field
        )
    };

    match record.tx_type.to_lowercase().as_str() {
        "buy" => record
            .warranty_price
            .map(|warranty_price| TransactionKind::Buy { warranty_price })
            .ok_or_else(|| missing("warrantyPrice")),
        "lease" => record
            .months
            .map(|months| TransactionKind::Lease { months })
            .ok_or_else(|| missing("months")),
        "rent" => record
            .days
            .map(|days| TransactionKind::Rent { days })
            .ok_or_else(|| missing("days")),
        _ => Err(format!(
            "Invalid transaction type: '{}' for transaction {}",
            record.tx_type, record.id
        )),
    }
}
