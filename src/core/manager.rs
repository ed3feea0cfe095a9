//! Vehicle manager
//!
//! This module provides the [`VehicleManager`], the only entry point for
//! changing the ledger. It owns the in-memory vehicle catalog and coordinates
//! the two JSON stores.
//!
//! Every transaction mutation follows the same shape:
//! 1. Load the full transaction set from the store
//! 2. Validate the change against it and against the catalog
//! 3. Apply the change to the in-memory list
//! 4. Rewrite the full set
//!
//! Validation always completes before the write, so a rejected call leaves
//! the stores and the catalog untouched. There is no index and no locking:
//! one manager per store is assumed.

use crate::core::config::StoreConfig;
use crate::core::query::TransactionQuery;
use crate::io::JsonStore;
use crate::types::{FleetError, Transaction, TransactionId, TransactionState, Vehicle};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

/// Result of a cancellation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The transaction was removed from the store
    Cancelled,
    /// The transaction is active and already started, so it was kept
    Retained,
}

/// Entry point into the fleet ledger
///
/// Holds the vehicle catalog in memory (loaded once at construction) and
/// re-reads the transaction store on every operation.
#[derive(Debug)]
pub struct VehicleManager {
    vehicles: Vec<Vehicle>,
    vehicle_store: JsonStore<Vehicle>,
    transaction_store: JsonStore<Transaction>,
}

impl VehicleManager {
    /// Create a manager over the stores named in `config`
    ///
    /// Loads the vehicle catalog eagerly. The transaction store is not touched
    /// until the first transaction operation.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::StoreUnavailable`] if the vehicle store file does
    /// not exist, and [`FleetError::MalformedStore`] if it cannot be parsed.
    /// An empty vehicle store is not an error.
    pub fn new(config: StoreConfig) -> Result<Self, FleetError> {
        let vehicle_store = JsonStore::new(config.vehicles_path);
        let transaction_store = JsonStore::new(config.transactions_path);

        let vehicles = vehicle_store.load()?;
        info!(
            path = %vehicle_store.path().display(),
            count = vehicles.len(),
            "vehicle catalog loaded"
        );

        Ok(VehicleManager {
            vehicles,
            vehicle_store,
            transaction_store,
        })
    }

    /// Persist a new transaction
    ///
    /// # Arguments
    ///
    /// * `transaction` - The transaction to append; its vehicle must be in
    ///   the catalog and its id must be unused
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction store cannot be read or written
    /// - The vehicle is not in the catalog ([`FleetError::VehicleUnavailable`])
    /// - The id is already persisted ([`FleetError::DuplicateTransaction`])
    pub fn add_transaction(&self, transaction: &Transaction) -> Result<(), FleetError> {
        let mut transactions = self.get_transactions().as_list()?;

        if !self.vehicles.contains(transaction.vehicle()) {
            warn!(
                tx = transaction.id(),
                vin = transaction.vehicle().vin(),
                "vehicle not in catalog"
            );
            return Err(FleetError::vehicle_unavailable(
                transaction.id(),
                transaction.vehicle().vin(),
            ));
        }

        if transactions.iter().any(|t| t.id() == transaction.id()) {
            return Err(FleetError::duplicate_transaction(transaction.id()));
        }

        transactions.push(transaction.clone());
        self.transaction_store.save(&transactions)?;

        info!(
            tx = transaction.id(),
            tx_type = transaction.type_tag(),
            vin = transaction.vehicle().vin(),
            "transaction added"
        );
        Ok(())
    }

    /// Replace a persisted transaction with `transaction`
    ///
    /// The old record is removed by id and the new one appended.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No transaction with this id is persisted
    ///   ([`FleetError::TransactionNotFound`])
    /// - The persisted version is ACTIVE and the start date, the vehicle
    ///   VIN, the state or the activation date differs
    ///   ([`FleetError::ActiveTransactionLocked`])
    /// - The vehicle is not in the catalog ([`FleetError::VehicleNotFound`])
    /// - The transaction store cannot be read or written
    pub fn update_transaction(&self, transaction: &Transaction) -> Result<(), FleetError> {
        let mut transactions = self.get_transactions().as_list()?;

        let existing = transactions
            .iter()
            .find(|t| t.id() == transaction.id())
            .ok_or_else(|| FleetError::transaction_not_found(transaction.id(), "update"))?;

        if existing.state() == TransactionState::Active
            && (existing.start_date() != transaction.start_date()
                || existing.vehicle().vin() != transaction.vehicle().vin()
                || existing.state() != transaction.state()
                || existing.activation_date() != transaction.activation_date())
        {
            return Err(FleetError::active_transaction_locked(transaction.id()));
        }

        if !self.vehicles.contains(transaction.vehicle()) {
            return Err(FleetError::vehicle_not_found(transaction.vehicle().vin()));
        }

        transactions.retain(|t| t.id() != transaction.id());
        transactions.push(transaction.clone());
        self.transaction_store.save(&transactions)?;

        info!(tx = transaction.id(), "transaction updated");
        Ok(())
    }

    /// Activate `transaction` and persist it
    ///
    /// On success the caller's transaction is ACTIVE with its activation date
    /// set. On failure it is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`FleetError::TransactionNotFound`] if no transaction with this id
    ///   is persisted
    /// - [`FleetError::ActivationRejected`] if the transaction or its
    ///   persisted version is already active, or its start date is not in
    ///   the future
    /// - Any error from [`update_transaction`](Self::update_transaction)
    pub fn activate_transaction(&self, transaction: &mut Transaction) -> Result<(), FleetError> {
        let persisted = self
            .get_transactions()
            .with_id(transaction.id())
            .as_list()?
            .into_iter()
            .next()
            .ok_or_else(|| FleetError::transaction_not_found(transaction.id(), "activate"))?;
        if persisted.state() == TransactionState::Active {
            return Err(FleetError::activation_rejected(transaction.id()));
        }

        let mut activated = transaction.clone();
        activated.activate()?;
        self.update_transaction(&activated)?;

        info!(tx = activated.id(), "transaction activated");
        *transaction = activated;
        Ok(())
    }

    /// Activate the persisted transaction with this id
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::TransactionNotFound`] if no transaction has this
    /// id, otherwise as [`activate_transaction`](Self::activate_transaction).
    pub fn activate_transaction_by_id(&self, id: TransactionId) -> Result<Transaction, FleetError> {
        let mut transaction = self
            .get_transactions()
            .with_id(id)
            .as_list()?
            .into_iter()
            .next()
            .ok_or_else(|| FleetError::transaction_not_found(id, "activate"))?;

        self.activate_transaction(&mut transaction)?;
        Ok(transaction)
    }

    /// Cancel the persisted transaction with the same id as `transaction`
    pub fn cancel_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<CancelOutcome, FleetError> {
        self.cancel_transaction_by_id(transaction.id())
    }

    /// Cancel the persisted transaction with this id
    ///
    /// A DRAFT transaction, or an ACTIVE one whose start date is still in the
    /// future, is removed. An ACTIVE transaction that has already started is
    /// kept and [`CancelOutcome::Retained`] is returned. The transaction set
    /// is rewritten in both cases.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::TransactionNotFound`] if no transaction has this
    /// id, or an invalid-operation error if the store cannot be read or
    /// written.
    pub fn cancel_transaction_by_id(&self, id: TransactionId) -> Result<CancelOutcome, FleetError> {
        let mut transactions = self.get_transactions().as_list()?;

        let position = transactions
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| FleetError::transaction_not_found(id, "cancel"))?;

        let outcome = if transactions[position].is_cancellable_at(Utc::now()) {
            transactions.remove(position);
            info!(tx = id, "transaction cancelled");
            CancelOutcome::Cancelled
        } else {
            warn!(tx = id, "active transaction already started, not cancelled");
            CancelOutcome::Retained
        };

        self.transaction_store.save(&transactions)?;
        Ok(outcome)
    }

    /// Start a query over the persisted transactions
    pub fn get_transactions(&self) -> TransactionQuery<'_> {
        TransactionQuery::new(&self.transaction_store)
    }

    /// Add a vehicle to the catalog and persist the catalog
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::StoreWriteFailed`] if the catalog cannot be
    /// written; the in-memory catalog is unchanged in that case.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), FleetError> {
        let mut vehicles = self.vehicles.clone();
        let vin = vehicle.vin().to_string();
        vehicles.push(vehicle);

        self.vehicle_store.save(&vehicles)?;
        self.vehicles = vehicles;

        info!(vin = %vin, "vehicle added");
        Ok(())
    }

    /// Read a vehicle from a single-vehicle JSON file and add it
    ///
    /// # Errors
    ///
    /// Returns an invalid-vehicle error if the file cannot be read or holds an
    /// invalid vehicle, otherwise as [`add_vehicle`](Self::add_vehicle).
    pub fn add_vehicle_from_file(&mut self, path: &Path) -> Result<(), FleetError> {
        let vehicle = Vehicle::from_file(path)?;
        self.add_vehicle(vehicle)
    }

    /// The vehicle catalog
    pub fn get_vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Remove a vehicle (compared by value) and persist the catalog
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::VehicleNotFound`] if the vehicle is not in the
    /// catalog.
    pub fn remove_vehicle(&mut self, vehicle: &Vehicle) -> Result<(), FleetError> {
        let position = self
            .vehicles
            .iter()
            .position(|v| v == vehicle)
            .ok_or_else(|| FleetError::vehicle_not_found(vehicle.vin()))?;

        self.remove_vehicle_at(position)?;
        Ok(())
    }

    /// Remove the vehicle with this VIN and persist the catalog
    ///
    /// # Returns
    ///
    /// The removed vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::VehicleNotFound`] if no vehicle has this VIN.
    pub fn remove_vehicle_by_vin(&mut self, vin: &str) -> Result<Vehicle, FleetError> {
        let position = self
            .vehicles
            .iter()
            .position(|v| v.vin() == vin)
            .ok_or_else(|| FleetError::vehicle_not_found(vin))?;

        self.remove_vehicle_at(position)
    }

    fn remove_vehicle_at(&mut self, position: usize) -> Result<Vehicle, FleetError> {
        let mut vehicles = self.vehicles.clone();
        let removed = vehicles.remove(position);

        self.vehicle_store.save(&vehicles)?;
        self.vehicles = vehicles;

        info!(vin = removed.vin(), "vehicle removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, Customer, ErrorKind, VehicleType};
    use chrono::{DateTime, Duration, TimeZone};
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn customer() -> Customer {
        Customer::new(
            "Jake",
            "Strang",
            Address::new("123 1st St.", "Maryland", "55555", "USA", "Baltimore"),
            "5551234567",
            "jake@notadomain.null",
        )
    }

    fn sienna() -> Vehicle {
        Vehicle::new(
            "Toyota",
            "Sienna",
            "qwertyuiopasdfgjk",
            2008,
            Decimal::new(3200, 0),
            VehicleType::TruckOrVan,
        )
        .unwrap()
    }

    fn focus() -> Vehicle {
        Vehicle::new(
            "Ford",
            "Focus",
            "12345678901234567",
            2004,
            Decimal::new(1800, 0),
            VehicleType::Sedan,
        )
        .unwrap()
    }

    fn outsider() -> Vehicle {
        Vehicle::new(
            "Mazda",
            "6",
            "mnbvcxzkjhgfdsapo",
            2015,
            Decimal::new(3000, 0),
            VehicleType::Sedan,
        )
        .unwrap()
    }

    fn past() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 12, 1, 0, 0, 0).unwrap()
    }

    fn future() -> DateTime<Utc> {
        Utc::now() + Duration::days(60)
    }

    /// Empty stores with two catalog vehicles
    fn setup() -> (TempDir, VehicleManager) {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        fs::write(&config.vehicles_path, "").unwrap();
        fs::write(&config.transactions_path, "").unwrap();

        let mut manager = VehicleManager::new(config).unwrap();
        manager.add_vehicle(sienna()).unwrap();
        manager.add_vehicle(focus()).unwrap();
        (dir, manager)
    }

    fn stored_ids(manager: &VehicleManager) -> Vec<TransactionId> {
        manager
            .get_transactions()
            .as_list()
            .unwrap()
            .iter()
            .map(|t| t.id())
            .collect()
    }

    #[test]
    fn test_new_fails_on_missing_vehicle_store() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(
            dir.path().join("not_a_real_file.json"),
            dir.path().join("transactions.json"),
        );

        let error = VehicleManager::new(config).unwrap_err();
        assert!(matches!(error, FleetError::StoreUnavailable { .. }));
        assert_eq!(error.kind(), ErrorKind::InvalidOperation);
        assert!(error.to_string().contains("not_a_real_file.json"));
    }

    #[test]
    fn test_new_accepts_empty_vehicle_store() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        fs::write(&config.vehicles_path, "").unwrap();

        let manager = VehicleManager::new(config).unwrap();
        assert!(manager.get_vehicles().is_empty());
    }

    #[test]
    fn test_add_transaction_persists() {
        let (_dir, manager) = setup();

        manager
            .add_transaction(&Transaction::rent(1, customer(), sienna(), past(), 100).unwrap())
            .unwrap();

        let stored = manager.get_transactions().with_id(1).as_list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].days(), Some(100));
        assert_eq!(stored[0].price(), Decimal::new(4999, 0));
    }

    #[test]
    fn test_add_transaction_rejects_unknown_vehicle() {
        let (_dir, manager) = setup();

        let error = manager
            .add_transaction(&Transaction::rent(1, customer(), outsider(), past(), 1).unwrap())
            .unwrap_err();

        assert!(matches!(error, FleetError::VehicleUnavailable { tx: 1, .. }));
        assert_eq!(error.kind(), ErrorKind::InvalidTransaction);
        assert!(stored_ids(&manager).is_empty());
    }

    #[test]
    fn test_add_transaction_rejects_duplicate_id() {
        let (_dir, manager) = setup();
        manager
            .add_transaction(&Transaction::rent(1, customer(), sienna(), past(), 100).unwrap())
            .unwrap();

        let error = manager
            .add_transaction(&Transaction::lease(1, customer(), focus(), past(), 12).unwrap())
            .unwrap_err();

        assert!(matches!(error, FleetError::DuplicateTransaction { tx: 1 }));
        let stored = manager.get_transactions().as_list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].type_tag(), "rent");
    }

    #[test]
    fn test_add_transaction_requires_transaction_store() {
        let (dir, manager) = setup();
        fs::remove_file(dir.path().join("transactions.json")).unwrap();

        let error = manager
            .add_transaction(&Transaction::rent(1, customer(), sienna(), past(), 1).unwrap())
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_update_transaction_replaces_record() {
        let (_dir, manager) = setup();
        let mut transaction = Transaction::lease(1, customer(), sienna(), past(), 12).unwrap();
        manager.add_transaction(&transaction).unwrap();
        manager
            .add_transaction(&Transaction::rent(2, customer(), focus(), past(), 3).unwrap())
            .unwrap();

        transaction.set_months(24).unwrap();
        manager.update_transaction(&transaction).unwrap();

        let stored = manager.get_transactions().with_id(1).as_list().unwrap();
        assert_eq!(stored, vec![transaction]);
        assert_eq!(stored_ids(&manager), vec![2, 1]);
    }

    #[test]
    fn test_update_transaction_not_found() {
        let (_dir, manager) = setup();

        let error = manager
            .update_transaction(&Transaction::rent(5, customer(), sienna(), past(), 1).unwrap())
            .unwrap_err();
        assert!(matches!(error, FleetError::TransactionNotFound { tx: 5, .. }));
    }

    #[test]
    fn test_update_transaction_rejects_unknown_vehicle() {
        let (_dir, manager) = setup();
        let mut transaction = Transaction::rent(1, customer(), sienna(), past(), 1).unwrap();
        manager.add_transaction(&transaction).unwrap();

        transaction.set_vehicle(outsider()).unwrap();
        let error = manager.update_transaction(&transaction).unwrap_err();

        assert!(matches!(error, FleetError::VehicleNotFound { .. }));
        assert_eq!(error.kind(), ErrorKind::InvalidVehicle);
        let stored = manager.get_transactions().with_id(1).as_list().unwrap();
        assert_eq!(stored[0].vehicle(), &sienna());
    }

    #[test]
    fn test_active_transaction_schedule_and_vehicle_are_locked() {
        let (_dir, manager) = setup();
        let mut transaction = Transaction::rent(1, customer(), sienna(), future(), 10).unwrap();
        manager.add_transaction(&transaction).unwrap();
        manager.activate_transaction(&mut transaction).unwrap();

        let mut moved = transaction.clone();
        moved.set_start_date(future() + Duration::days(1));
        assert!(matches!(
            manager.update_transaction(&moved).unwrap_err(),
            FleetError::ActiveTransactionLocked { tx: 1 }
        ));

        let mut swapped = transaction.clone();
        swapped.set_vehicle(focus()).unwrap();
        assert!(matches!(
            manager.update_transaction(&swapped).unwrap_err(),
            FleetError::ActiveTransactionLocked { tx: 1 }
        ));

        let mut extended = transaction.clone();
        extended.set_days(20).unwrap();
        manager.update_transaction(&extended).unwrap();

        let stored = manager.get_transactions().with_id(1).as_list().unwrap();
        assert_eq!(stored, vec![extended]);
    }

    #[test]
    fn test_activate_transaction_updates_caller_and_store() {
        let (_dir, manager) = setup();
        let mut transaction =
            Transaction::buy(1, customer(), sienna(), future(), Decimal::ONE).unwrap();
        manager.add_transaction(&transaction).unwrap();

        manager.activate_transaction(&mut transaction).unwrap();

        assert_eq!(transaction.state(), TransactionState::Active);
        let stored = manager
            .get_transactions()
            .with_state(TransactionState::Active)
            .as_list()
            .unwrap();
        assert_eq!(stored, vec![transaction]);
    }

    #[test]
    fn test_activate_transaction_past_start_leaves_caller_untouched() {
        let (_dir, manager) = setup();
        let mut transaction = Transaction::rent(1, customer(), sienna(), past(), 1).unwrap();
        manager.add_transaction(&transaction).unwrap();
        let before = transaction.clone();

        let error = manager.activate_transaction(&mut transaction).unwrap_err();

        assert!(matches!(error, FleetError::ActivationRejected { tx: 1 }));
        assert_eq!(transaction, before);
    }

    #[test]
    fn test_activate_unpersisted_transaction_leaves_caller_untouched() {
        let (_dir, manager) = setup();
        let mut transaction = Transaction::rent(1, customer(), sienna(), future(), 1).unwrap();

        let error = manager.activate_transaction(&mut transaction).unwrap_err();

        assert!(matches!(error, FleetError::TransactionNotFound { .. }));
        assert_eq!(transaction.state(), TransactionState::Draft);
        assert_eq!(transaction.activation_date(), None);
    }

    #[test]
    fn test_activate_transaction_by_id() {
        let (_dir, manager) = setup();
        manager
            .add_transaction(&Transaction::lease(4, customer(), focus(), future(), 6).unwrap())
            .unwrap();

        let activated = manager.activate_transaction_by_id(4).unwrap();
        assert_eq!(activated.state(), TransactionState::Active);
        assert!(activated.activation_date().is_some());

        let again = manager.activate_transaction_by_id(4).unwrap_err();
        assert!(matches!(again, FleetError::ActivationRejected { tx: 4 }));
    }

    #[test]
    fn test_activate_transaction_by_id_not_found() {
        let (_dir, manager) = setup();

        let error = manager.activate_transaction_by_id(999).unwrap_err();
        assert!(matches!(error, FleetError::TransactionNotFound { tx: 999, .. }));
        assert_eq!(error.kind(), ErrorKind::InvalidTransaction);
    }

    #[test]
    fn test_activate_stale_draft_copy_is_rejected() {
        let (_dir, manager) = setup();
        let mut stale = Transaction::lease(3, customer(), focus(), future(), 6).unwrap();
        manager.add_transaction(&stale).unwrap();
        let activated = manager.activate_transaction_by_id(3).unwrap();

        let error = manager.activate_transaction(&mut stale).unwrap_err();

        assert!(matches!(error, FleetError::ActivationRejected { tx: 3 }));
        assert_eq!(stale.state(), TransactionState::Draft);
        let stored = manager.get_transactions().with_id(3).as_list().unwrap();
        assert_eq!(stored, vec![activated]);
    }

    #[test]
    fn test_update_cannot_revert_active_state_or_activation_date() {
        let (_dir, manager) = setup();
        let stale = Transaction::rent(1, customer(), sienna(), future(), 10).unwrap();
        manager.add_transaction(&stale).unwrap();
        let activated = manager.activate_transaction_by_id(1).unwrap();

        let error = manager.update_transaction(&stale).unwrap_err();
        assert!(matches!(error, FleetError::ActiveTransactionLocked { tx: 1 }));

        let mut reactivated = stale.clone();
        reactivated.activate_at(Utc::now() - Duration::days(2)).unwrap();
        let error = manager.update_transaction(&reactivated).unwrap_err();
        assert!(matches!(error, FleetError::ActiveTransactionLocked { tx: 1 }));

        let stored = manager.get_transactions().with_id(1).as_list().unwrap();
        assert_eq!(stored, vec![activated]);
    }

    #[test]
    fn test_cancel_draft_transaction() {
        let (_dir, manager) = setup();
        let transaction = Transaction::rent(1, customer(), sienna(), past(), 1).unwrap();
        manager.add_transaction(&transaction).unwrap();

        assert_eq!(
            manager.cancel_transaction(&transaction).unwrap(),
            CancelOutcome::Cancelled
        );
        assert!(stored_ids(&manager).is_empty());
    }

    #[test]
    fn test_cancel_active_transaction_before_start() {
        let (_dir, manager) = setup();
        let mut transaction = Transaction::rent(1, customer(), sienna(), future(), 1).unwrap();
        manager.add_transaction(&transaction).unwrap();
        manager.activate_transaction(&mut transaction).unwrap();

        assert_eq!(
            manager.cancel_transaction_by_id(1).unwrap(),
            CancelOutcome::Cancelled
        );
        assert!(stored_ids(&manager).is_empty());
    }

    #[test]
    fn test_cancel_started_active_transaction_is_retained() {
        let (dir, manager) = setup();
        let mut started = Transaction::rent(1, customer(), sienna(), past(), 1).unwrap();
        started.activate_at(past() - Duration::days(1)).unwrap();
        // Written directly: an already-started active transaction cannot be
        // produced through the manager without waiting for the clock.
        let store: JsonStore<Transaction> = JsonStore::new(dir.path().join("transactions.json"));
        store.save(&[started.clone()]).unwrap();

        assert_eq!(
            manager.cancel_transaction_by_id(1).unwrap(),
            CancelOutcome::Retained
        );
        assert_eq!(manager.get_transactions().as_list().unwrap(), vec![started]);
    }

    #[test]
    fn test_cancel_transaction_not_found() {
        let (_dir, manager) = setup();

        let error = manager.cancel_transaction_by_id(42).unwrap_err();
        assert!(matches!(error, FleetError::TransactionNotFound { tx: 42, .. }));
    }

    #[test]
    fn test_add_vehicle_persists_catalog() {
        let (dir, manager) = setup();
        drop(manager);

        let second = VehicleManager::new(StoreConfig::in_dir(dir.path())).unwrap();
        assert_eq!(second.get_vehicles(), &[sienna(), focus()]);
    }

    #[test]
    fn test_add_vehicle_write_failure_keeps_catalog() {
        let dir = TempDir::new().unwrap();
        let vehicles_path = dir.path().join("vehicles.json");
        fs::write(&vehicles_path, "[]").unwrap();
        let config = StoreConfig::new(&vehicles_path, dir.path().join("t.json"));
        let mut manager = VehicleManager::new(config).unwrap();
        manager.vehicle_store = JsonStore::new(dir.path().join("gone").join("vehicles.json"));

        let error = manager.add_vehicle(sienna()).unwrap_err();
        assert!(matches!(error, FleetError::StoreWriteFailed { .. }));
        assert!(manager.get_vehicles().is_empty());
    }

    #[test]
    fn test_remove_vehicle_by_value() {
        let (dir, mut manager) = setup();

        manager.remove_vehicle(&sienna()).unwrap();
        assert_eq!(manager.get_vehicles(), &[focus()]);

        let reloaded = VehicleManager::new(StoreConfig::in_dir(dir.path())).unwrap();
        assert_eq!(reloaded.get_vehicles(), &[focus()]);

        let error = manager.remove_vehicle(&sienna()).unwrap_err();
        assert!(matches!(error, FleetError::VehicleNotFound { .. }));
        assert_eq!(error.kind(), ErrorKind::InvalidVehicle);
    }

    #[test]
    fn test_remove_vehicle_by_vin_removes_and_persists() {
        // Removal by VIN deletes the vehicle and rewrites the catalog; it does
        // not stop at locating it.
        let (dir, mut manager) = setup();

        let removed = manager.remove_vehicle_by_vin("12345678901234567").unwrap();
        assert_eq!(removed, focus());
        assert_eq!(manager.get_vehicles(), &[sienna()]);

        let reloaded = VehicleManager::new(StoreConfig::in_dir(dir.path())).unwrap();
        assert_eq!(reloaded.get_vehicles(), &[sienna()]);
    }

    #[test]
    fn test_remove_vehicle_by_vin_not_found() {
        let (_dir, mut manager) = setup();

        let error = manager.remove_vehicle_by_vin("00000000000000000").unwrap_err();
        assert!(matches!(error, FleetError::VehicleNotFound { .. }));
        assert_eq!(manager.get_vehicles().len(), 2);
    }
}
