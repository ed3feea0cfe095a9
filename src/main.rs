//! Fleet Ledger CLI
//!
//! Command-line interface over the vehicle catalog and transaction stores.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- vehicles
//! cargo run -- add-vehicle new_vehicle.json
//! cargo run -- remove-vehicle qwertyuiopasdfgjk
//! cargo run -- transactions --email jake@notadomain.null --state active
//! cargo run -- transactions --start-date 2020-12-01 --csv > transactions.csv
//! cargo run -- activate 3
//! cargo run -- --transactions /var/fleet/transactions.json cancel 3
//! ```
//!
//! Listings go to stdout. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (store missing or malformed, rejected operation, etc.)

use fleet_ledger::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
