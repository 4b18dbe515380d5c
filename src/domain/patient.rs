use serde::{Deserialize, Serialize};

use crate::domain::address::{Address, UpdateAddress};
use crate::domain::types::{Cpf, EmailAddress, PatientId, PersonName, PhoneNumber};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub cpf: Cpf,
    pub address: Address,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPatient {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub cpf: Cpf,
    pub address: Address,
}

/// Sparse set of patient changes. Email and CPF are immutable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatePatient {
    pub name: Option<PersonName>,
    pub phone: Option<PhoneNumber>,
    pub address: Option<UpdateAddress>,
}

impl Patient {
    pub fn merge(&mut self, updates: &UpdatePatient) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(phone) = &updates.phone {
            self.phone = phone.clone();
        }
        if let Some(address) = &updates.address {
            self.address.merge(address);
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
