use crate::core::config::{StoreConfig, DEFAULT_TRANSACTIONS_FILE, DEFAULT_VEHICLES_FILE};
use crate::core::TransactionQuery;
use crate::types::{TransactionId, TransactionState};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Manage a vehicle catalog and its buy, lease and rent transactions
#[derive(Parser, Debug)]
#[command(name = "fleet-ledger")]
#[command(about = "Manage a vehicle catalog and its buy, lease and rent transactions", long_about = None)]
pub struct CliArgs {
    /// Vehicle catalog store
    #[arg(
        long = "vehicles",
        value_name = "PATH",
        global = true,
        default_value = DEFAULT_VEHICLES_FILE,
        help = "Path to the vehicle catalog JSON file"
    )]
    pub vehicles_file: PathBuf,

    /// Transaction store
    #[arg(
        long = "transactions",
        value_name = "PATH",
        global = true,
        default_value = DEFAULT_TRANSACTIONS_FILE,
        help = "Path to the transactions JSON file"
    )]
    pub transactions_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every vehicle in the catalog
    Vehicles,
    /// Add a vehicle from a JSON file holding a single vehicle object
    AddVehicle {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Remove the vehicle with this VIN from the catalog
    RemoveVehicle {
        #[arg(value_name = "VIN")]
        vin: String,
    },
    /// Query transactions
    Transactions(TransactionFilter),
    /// Activate a draft transaction before its start date
    Activate {
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: TransactionId,
    },
    /// Cancel a transaction
    Cancel {
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: TransactionId,
    },
}

/// Filters of the `transactions` subcommand
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    #[arg(
        long,
        value_name = "ID",
        allow_negative_numbers = true,
        help = "Only the transaction with this id"
    )]
    pub id: Option<TransactionId>,

    #[arg(long, value_name = "EMAIL", help = "Only transactions of this customer email")]
    pub email: Option<String>,

    #[arg(
        long = "start-date",
        value_name = "DATE",
        value_parser = parse_start_date,
        help = "Only transactions starting at this instant (YYYY-MM-DD or RFC 3339)"
    )]
    pub start_date: Option<DateTime<Utc>>,

    #[arg(long, value_enum, value_name = "STATE", help = "Only transactions in this state")]
    pub state: Option<StateArg>,

    #[arg(long, help = "Write CSV instead of the readable listing")]
    pub csv: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Draft,
    Active,
}

impl From<StateArg> for TransactionState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Draft => TransactionState::Draft,
            StateArg::Active => TransactionState::Active,
        }
    }
}

impl TransactionFilter {
    /// Add every filter that was given to `query`
    pub fn apply<'a>(&self, mut query: TransactionQuery<'a>) -> TransactionQuery<'a> {
        if let Some(id) = self.id {
            query = query.with_id(id);
        }
        if let Some(email) = &self.email {
            query = query.with_email(email.as_str());
        }
        if let Some(start_date) = self.start_date {
            query = query.with_start_date(start_date);
        }
        if let Some(state) = self.state {
            query = query.with_state(state.into());
        }
        query
    }
}

impl CliArgs {
    /// Store locations from the `--vehicles` and `--transactions` flags
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.vehicles_file, &self.transactions_file)
    }
}

/// Parse a start date given as RFC 3339 or as a bare `YYYY-MM-DD` (midnight UTC)
fn parse_start_date(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.and_utc())
        .ok_or_else(|| format!("invalid date '{}': expected YYYY-MM-DD or RFC 3339", value))
}
