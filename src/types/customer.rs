//! Customer contact records
//!
//! Plain mutable records with no uniqueness constraint. A transaction holds
//! its own copy of the customer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Address {
            street: street.into(),
            state: state.into(),
            zip: zip.into(),
            country: country.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip, self.country
        )
    }
}

/// Customer contact details
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    first_name: String,
    last_name: String,
    mailing_address: Address,
    phone_number: String,
    email: String,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        mailing_address: Address,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Customer {
            first_name: first_name.into(),
            last_name: last_name.into(),
            mailing_address,
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn mailing_address(&self) -> &Address {
        &self.mailing_address
    }

    pub fn set_mailing_address(&mut self, mailing_address: Address) {
        self.mailing_address = mailing_address;
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "First Name: {}", self.first_name)?;
        writeln!(f, "Last Name: {}", self.last_name)?;
        writeln!(f, "Mailing Address: {}", self.mailing_address)?;
        writeln!(f, "Phone Number: {}", self.phone_number)?;
        write!(f, "Email: {}", self.email)
    }
}
