//! Command dispatch
//!
//! Runs one parsed [`Command`] against a [`VehicleManager`] opened on the
//! stores named by the global flags. Listings and confirmations go to
//! `output`; errors are returned to the caller.

use crate::cli::args::{CliArgs, Command};
use crate::core::{CancelOutcome, VehicleManager};
use crate::io::write_transactions_csv;
use crate::types::FleetError;
use std::io::Write;

/// Execute the command in `args`, writing its output to `output`
///
/// # Errors
///
/// Returns any error raised by the ledger, or [`FleetError::IoError`] if
/// `output` cannot be written.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), FleetError> {
    let mut manager = VehicleManager::new(args.to_store_config())?;

    match &args.command {
        Command::Vehicles => {
            for vehicle in manager.get_vehicles() {
                writeln!(output, "{}\n", vehicle)?;
            }
        }
        Command::AddVehicle { file } => {
            manager.add_vehicle_from_file(file)?;
            writeln!(output, "Added vehicle from {}", file.display())?;
        }
        Command::RemoveVehicle { vin } => {
            let removed = manager.remove_vehicle_by_vin(vin)?;
            writeln!(output, "Removed vehicle {}", removed.vin())?;
        }
        Command::Transactions(filter) => {
            let transactions = filter.apply(manager.get_transactions()).as_list()?;
            if filter.csv {
                write_transactions_csv(&transactions, output)?;
            } else {
                for transaction in &transactions {
                    writeln!(output, "{}\n", transaction)?;
                }
            }
        }
        Command::Activate { id } => {
            let transaction = manager.activate_transaction_by_id(*id)?;
            writeln!(output, "Activated transaction {}", transaction.id())?;
        }
        Command::Cancel { id } => match manager.cancel_transaction_by_id(*id)? {
            CancelOutcome::Cancelled => writeln!(output, "Cancelled transaction {}", id)?,
            CancelOutcome::Retained => writeln!(
                output,
                "Transaction {} is active and has already started; it was not cancelled",
                id
            )?,
        },
    }

    Ok(())
}
