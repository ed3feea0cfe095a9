//! Transaction-related types for the fleet ledger
//!
//! A [`Transaction`] is a buy, lease, or rent agreement for one catalog
//! vehicle. The variant and its variant-specific field live in
//! [`TransactionKind`]; the price is derived from the kind and the vehicle and
//! is recomputed every time either of them changes.
//!
//! # Lifecycle
//!
//! ```text
//! DRAFT ──activate()──▶ ACTIVE
//! ```
//!
//! Activation is one-way and only allowed strictly before the start date.
//! Cancelling is a deletion handled by the manager, not a state.

use crate::io::json_format::TransactionRecord;
use crate::types::customer::Customer;
use crate::types::error::FleetError;
use crate::types::vehicle::Vehicle;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier, assigned by the caller
pub type TransactionId = i32;

/// Lifecycle state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionState {
    /// Created but not yet committed; schedule and vehicle may still change
    Draft,
    /// Committed; schedule and vehicle are frozen
    Active,
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionState::Draft => f.write_str("DRAFT"),
            TransactionState::Active => f.write_str("ACTIVE"),
        }
    }
}

/// Transaction variant with its variant-specific field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Outright purchase with an optional warranty
    Buy { warranty_price: Decimal },
    /// Lease over a number of months
    Lease { months: u32 },
    /// Rental over a number of days
    Rent { days: u32 },
}

impl TransactionKind {
    /// Type tag written to the store
    pub fn tag(&self) -> &'static str {
        match self {
            TransactionKind::Buy { .. } => "buy",
            TransactionKind::Lease { .. } => "lease",
            TransactionKind::Rent { .. } => "rent",
        }
    }

    /// Human-readable variant name
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Buy { .. } => "Buy",
            TransactionKind::Lease { .. } => "Lease",
            TransactionKind::Rent { .. } => "Rent",
        }
    }

    /// Price of this variant for the given vehicle
    ///
    /// - Buy: vehicle price plus 5% tax, plus warranty
    /// - Lease: 1% of vehicle price per month
    /// - Rent: daily fee of the vehicle type per day
    ///
    /// No rounding is applied. Returns `None` if the result does not fit in a
    /// [`Decimal`].
    pub fn price_for(&self, vehicle: &Vehicle) -> Option<Decimal> {
        match *self {
            TransactionKind::Buy { warranty_price } => vehicle
                .price()
                .checked_mul(Decimal::new(105, 2))?
                .checked_add(warranty_price),
            TransactionKind::Lease { months } => Decimal::new(1, 2)
                .checked_mul(vehicle.price())?
                .checked_mul(Decimal::from(months)),
            TransactionKind::Rent { days } => {
                Decimal::from(days).checked_mul(vehicle.vehicle_type().daily_fee())
            }
        }
    }
}

/// Buy, lease, or rent agreement for a catalog vehicle
///
/// Persisted through [`TransactionRecord`], which stamps the type tag on
/// every encode and recomputes the price on every decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    id: TransactionId,
    state: TransactionState,
    customer: Customer,
    vehicle: Vehicle,
    price: Decimal,
    start_date: DateTime<Utc>,
    activation_date: Option<DateTime<Utc>>,
    kind: TransactionKind,
}

impl Transaction {
    /// Create a DRAFT transaction with its price computed from `kind`
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::PriceOverflow`] if the price does not fit in a
    /// decimal.
    pub fn new(
        id: TransactionId,
        customer: Customer,
        vehicle: Vehicle,
        start_date: DateTime<Utc>,
        kind: TransactionKind,
    ) -> Result<Self, FleetError> {
        let price = price_of(id, &kind, &vehicle)?;
        Ok(Transaction {
            id,
            state: TransactionState::Draft,
            customer,
            vehicle,
            price,
            start_date,
            activation_date: None,
            kind,
        })
    }

    pub fn buy(
        id: TransactionId,
        customer: Customer,
        vehicle: Vehicle,
        start_date: DateTime<Utc>,
        warranty_price: Decimal,
    ) -> Result<Self, FleetError> {
        Self::new(
            id,
            customer,
            vehicle,
            start_date,
            TransactionKind::Buy { warranty_price },
        )
    }

    pub fn lease(
        id: TransactionId,
        customer: Customer,
        vehicle: Vehicle,
        start_date: DateTime<Utc>,
        months: u32,
    ) -> Result<Self, FleetError> {
        Self::new(
            id,
            customer,
            vehicle,
            start_date,
            TransactionKind::Lease { months },
        )
    }

    pub fn rent(
        id: TransactionId,
        customer: Customer,
        vehicle: Vehicle,
        start_date: DateTime<Utc>,
        days: u32,
    ) -> Result<Self, FleetError> {
        Self::new(
            id,
            customer,
            vehicle,
            start_date,
            TransactionKind::Rent { days },
        )
    }

    /// Rebuild a transaction from persisted fields
    ///
    /// The price is recomputed rather than trusted.
    pub(crate) fn restore(
        id: TransactionId,
        state: TransactionState,
        customer: Customer,
        vehicle: Vehicle,
        start_date: DateTime<Utc>,
        activation_date: Option<DateTime<Utc>>,
        kind: TransactionKind,
    ) -> Result<Self, FleetError> {
        let mut transaction = Self::new(id, customer, vehicle, start_date, kind)?;
        transaction.state = state;
        transaction.activation_date = activation_date;
        Ok(transaction)
    }

    /// Switch from DRAFT to ACTIVE using the current wall-clock time
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::ActivationRejected`] if the transaction is
    /// already active or its start date is not in the future. Nothing is
    /// modified on failure.
    pub fn activate(&mut self) -> Result<(), FleetError> {
        self.activate_at(Utc::now())
    }

    /// Switch from DRAFT to ACTIVE as of `now`
    pub fn activate_at(&mut self, now: DateTime<Utc>) -> Result<(), FleetError> {
        if self.state == TransactionState::Active || now >= self.start_date {
            return Err(FleetError::activation_rejected(self.id));
        }

        self.state = TransactionState::Active;
        self.activation_date = Some(now);
        Ok(())
    }

    /// Whether the cancellation rule allows removing this transaction at `now`
    ///
    /// Drafts can always be cancelled; active transactions only while the
    /// start date is still ahead.
    pub fn is_cancellable_at(&self, now: DateTime<Utc>) -> bool {
        self.state == TransactionState::Draft || now < self.start_date
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = customer;
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Replace the vehicle and recompute the price
    ///
    /// Nothing changes if the new price is out of range.
    pub fn set_vehicle(&mut self, vehicle: Vehicle) -> Result<(), FleetError> {
        self.price = price_of(self.id, &self.kind, &vehicle)?;
        self.vehicle = vehicle;
        Ok(())
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: DateTime<Utc>) {
        self.start_date = start_date;
    }

    pub fn activation_date(&self) -> Option<DateTime<Utc>> {
        self.activation_date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Type tag of the variant ("buy", "lease", "rent")
    pub fn type_tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Warranty price, for buy transactions
    pub fn warranty_price(&self) -> Option<Decimal> {
        match self.kind {
            TransactionKind::Buy { warranty_price } => Some(warranty_price),
            _ => None,
        }
    }

    /// Lease length, for lease transactions
    pub fn months(&self) -> Option<u32> {
        match self.kind {
            TransactionKind::Lease { months } => Some(months),
            _ => None,
        }
    }

    /// Rental length, for rent transactions
    pub fn days(&self) -> Option<u32> {
        match self.kind {
            TransactionKind::Rent { days } => Some(days),
            _ => None,
        }
    }

    /// Update the warranty price of a buy transaction and recompute the price
    pub fn set_warranty_price(&mut self, warranty_price: Decimal) -> Result<(), FleetError> {
        match self.kind {
            TransactionKind::Buy { .. } => self.set_kind(TransactionKind::Buy { warranty_price }),
            other => Err(FleetError::field_not_applicable(self.id, "warrantyPrice", other.tag())),
        }
    }

    /// Update the months of a lease transaction and recompute the price
    pub fn set_months(&mut self, months: u32) -> Result<(), FleetError> {
        match self.kind {
            TransactionKind::Lease { .. } => self.set_kind(TransactionKind::Lease { months }),
            other => Err(FleetError::field_not_applicable(self.id, "months", other.tag())),
        }
    }

    /// Update the days of a rent transaction and recompute the price
    pub fn set_days(&mut self, days: u32) -> Result<(), FleetError> {
        match self.kind {
            TransactionKind::Rent { .. } => self.set_kind(TransactionKind::Rent { days }),
            other => Err(FleetError::field_not_applicable(self.id, "days", other.tag())),
        }
    }

    fn set_kind(&mut self, kind: TransactionKind) -> Result<(), FleetError> {
        self.price = price_of(self.id, &kind, &self.vehicle)?;
        self.kind = kind;
        Ok(())
    }
}

fn price_of(
    id: TransactionId,
    kind: &TransactionKind,
    vehicle: &Vehicle,
) -> Result<Decimal, FleetError> {
    kind.price_for(vehicle).ok_or_else(|| FleetError::price_overflow(id, vehicle.vin()))
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "State: {}", self.state)?;
        writeln!(f, "Customer: {}", self.customer.full_name())?;
        writeln!(
            f,
            "Vehicle: {} {} {}",
            self.vehicle.year(),
            self.vehicle.make(),
            self.vehicle.model()
        )?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        writeln!(f, "Start Date: {}", self.start_date)?;
        match self.activation_date {
            Some(date) => writeln!(f, "Activation Date: {}", date)?,
            None => writeln!(f, "Activation Date: none")?,
        }
        match self.kind {
            TransactionKind::Buy { warranty_price } => {
                writeln!(f, "Warranty Price: ${:.2}", warranty_price)?
            }
            TransactionKind::Lease { months } => writeln!(f, "Months: {}", months)?,
            TransactionKind::Rent { days } => writeln!(f, "Days: {}", days)?,
        }
        write!(f, "Type: {}", self.kind.label())
    }
}
