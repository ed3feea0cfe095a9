//! Transaction queries
//!
//! [`TransactionQuery`] accumulates optional filters and, on [`as_list`],
//! re-reads the whole transaction store and keeps the records matching every
//! filter that was set. The builder holds no cache; two calls to `as_list`
//! read the store twice.
//!
//! ```no_run
//! use fleet_ledger::{StoreConfig, TransactionState, VehicleManager};
//!
//! let manager = VehicleManager::new(StoreConfig::default()).unwrap();
//! let drafts = manager
//!     .get_transactions()
//!     .with_email("jake@notadomain.null")
//!     .with_state(TransactionState::Draft)
//!     .as_list()
//!     .unwrap();
//! println!("{} draft transactions", drafts.len());
//! ```
//!
//! [`as_list`]: TransactionQuery::as_list

use crate::io::JsonStore;
use crate::types::{FleetError, Transaction, TransactionId, TransactionState};
use chrono::{DateTime, Utc};

/// Builder of conjunctive filters over the transaction store
#[derive(Debug, Clone)]
pub struct TransactionQuery<'a> {
    store: &'a JsonStore<Transaction>,
    id: Option<TransactionId>,
    email: Option<String>,
    start_date: Option<DateTime<Utc>>,
    state: Option<TransactionState>,
}

impl<'a> TransactionQuery<'a> {
    /// Create a query with no filters over `store`
    pub fn new(store: &'a JsonStore<Transaction>) -> Self {
        TransactionQuery {
            store,
            id: None,
            email: None,
            start_date: None,
            state: None,
        }
    }

    /// Keep only the transaction with this id
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = Some(id);
        self
    }

    /// Keep only transactions whose customer has exactly this email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Keep only transactions starting at exactly this instant
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Keep only transactions in this state
    pub fn with_state(mut self, state: TransactionState) -> Self {
        self.state = Some(state);
        self
    }

    /// Load the store and apply the filters
    ///
    /// Filters apply in the order id, email, start date, state. With no
    /// filters the full persisted set is returned in store order.
    ///
    /// # Errors
    ///
    /// Returns an invalid-operation error if the store cannot be read.
    pub fn as_list(&self) -> Result<Vec<Transaction>, FleetError> {
        let mut transactions = self.store.load()?;

        if let Some(id) = self.id {
            transactions.retain(|t| t.id() == id);
        }
        if let Some(email) = &self.email {
            transactions.retain(|t| t.customer().email() == email);
        }
        if let Some(start_date) = self.start_date {
            transactions.retain(|t| t.start_date() == start_date);
        }
        if let Some(state) = self.state {
            transactions.retain(|t| t.state() == state);
        }

        Ok(transactions)
    }
}
