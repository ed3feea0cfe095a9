//! Vehicle-related types for the fleet ledger
//!
//! A [`Vehicle`] is an immutable catalog entry identified by its VIN. Every
//! way of obtaining one (constructor, single-vehicle file, catalog store)
//! goes through the same VIN length check.

use crate::types::error::FleetError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Required VIN length in characters
pub const VIN_LENGTH: usize = 17;

/// Vehicle category with its flat daily rental fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Sedan,
    TruckOrVan,
    Suv,
}

impl VehicleType {
    /// Display name of the category
    pub fn name(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::TruckOrVan => "Truck or van",
            VehicleType::Suv => "SUV",
        }
    }

    /// Daily rental fee
    pub fn daily_fee(&self) -> Decimal {
        match self {
            VehicleType::Sedan => Decimal::new(3999, 2),
            VehicleType::TruckOrVan => Decimal::new(4999, 2),
            VehicleType::Suv => Decimal::new(4299, 2),
        }
    }
}

/// Raw vehicle shape as stored on disk, before VIN validation
#[derive(Debug, Deserialize)]
struct VehicleRecord {
    make: String,
    model: String,
    vin: String,
    year: u32,
    price: Decimal,
    #[serde(rename = "type")]
    vehicle_type: VehicleType,
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = FleetError;

    fn try_from(record: VehicleRecord) -> Result<Self, Self::Error> {
        Vehicle::new(
            record.make,
            record.model,
            record.vin,
            record.year,
            record.price,
            record.vehicle_type,
        )
    }
}

/// Fleet vehicle
///
/// Immutable after construction. Two vehicles are the same catalog entry when
/// all their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VehicleRecord")]
pub struct Vehicle {
    make: String,
    model: String,
    vin: String,
    year: u32,
    price: Decimal,
    #[serde(rename = "type")]
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Create a vehicle, rejecting any VIN that is not exactly 17 characters
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::InvalidVin`] if the VIN has the wrong length.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        vin: impl Into<String>,
        year: u32,
        price: Decimal,
        vehicle_type: VehicleType,
    ) -> Result<Self, FleetError> {
        let vin = vin.into();
        if vin.chars().count() != VIN_LENGTH {
            return Err(FleetError::invalid_vin(&vin));
        }

        Ok(Vehicle {
            make: make.into(),
            model: model.into(),
            vin,
            year,
            price,
            vehicle_type,
        })
    }

    /// Read a vehicle from a JSON file holding a single vehicle object
    ///
    /// The object has the same shape as one element of the vehicle store.
    ///
    /// # Errors
    ///
    /// - [`FleetError::VehicleFileUnreadable`] if the file cannot be read or
    ///   does not hold a vehicle object
    /// - [`FleetError::InvalidVin`] if the stored VIN has the wrong length
    pub fn from_file(path: &Path) -> Result<Self, FleetError> {
        let content =
            fs::read_to_string(path).map_err(|e| FleetError::vehicle_file_unreadable(path, e))?;

        let record: VehicleRecord = serde_json::from_str(&content)
            .map_err(|e| FleetError::vehicle_file_unreadable(path, e))?;

        Vehicle::try_from(record)
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Make: {}", self.make)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "VIN: {}", self.vin)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Price: {}", self.price)?;
        write!(f, "Type: {}", self.vehicle_type.name())
    }
}
