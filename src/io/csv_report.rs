//! CSV export of transaction listings
//!
//! Writes one row per transaction with columns:
//! id, type, state, email, vin, price, start_date, activation_date
//!
//! Rows are sorted by transaction ID for deterministic output. Prices are
//! rounded to two decimal places here, at the display edge.

use crate::types::{FleetError, Transaction};
use csv::Writer;
use std::io::Write;

const HEADER: [&str; 8] = [
    "id",
    "type",
    "state",
    "email",
    "vin",
    "price",
    "start_date",
    "activation_date",
];

/// Write transactions to `output` in CSV format
///
/// # Errors
///
/// Returns [`FleetError::IoError`] if a row cannot be written or flushed.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), FleetError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(HEADER).map_err(csv_error)?;

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|transaction| transaction.id());

    for transaction in sorted {
        writer
            .write_record(&[
                transaction.id().to_string(),
                transaction.type_tag().to_string(),
                transaction.state().to_string(),
                transaction.customer().email().to_string(),
                transaction.vehicle().vin().to_string(),
                format!("{:.2}", transaction.price()),
                transaction.start_date().to_rfc3339(),
                transaction
                    .activation_date()
                    .map(|date| date.to_rfc3339())
                    .unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

fn csv_error(error: csv::Error) -> FleetError {
    FleetError::IoError {
        message: format!("Failed to write CSV record: {}", error),
    }
}
