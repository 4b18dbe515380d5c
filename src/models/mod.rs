//! Diesel models and configuration structures.

use crate::domain::address::Address;
use crate::domain::types::{AddressLine, StateCode, TypeConstraintError, ZipCode};

pub mod config;
pub mod doctor;
pub mod patient;

/// Address columns as stored, flattened into the owning table.
pub(crate) struct AddressRow {
    pub street: String,
    pub neighborhood: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub number: Option<String>,
    pub complement: Option<String>,
}

impl TryFrom<AddressRow> for Address {
    type Error = TypeConstraintError;

    fn try_from(row: AddressRow) -> Result<Self, Self::Error> {
        Ok(Self {
            street: AddressLine::new(row.street)?,
            neighborhood: AddressLine::new(row.neighborhood)?,
            zip_code: ZipCode::new(row.zip_code)?,
            city: AddressLine::new(row.city)?,
            state: StateCode::new(row.state)?,
            number: row.number,
            complement: row.complement,
        })
    }
}
