//! Detail and list views of a patient.

use serde::Serialize;

use crate::domain::patient::Patient;
use crate::dto::address::AddressView;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetails {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub address: AddressView,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientListItem {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub cpf: String,
}

/// Answer of the active-flag lookup.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PatientStatus {
    pub id: i32,
    pub active: bool,
}

impl From<&Patient> for PatientDetails {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.get(),
            name: patient.name.to_string(),
            email: patient.email.to_string(),
            cpf: patient.cpf.to_string(),
            phone: patient.phone.to_string(),
            address: AddressView::from(&patient.address),
            active: patient.active,
        }
    }
}

impl From<Patient> for PatientListItem {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.get(),
            name: patient.name.into_inner(),
            email: patient.email.into_inner(),
            cpf: patient.cpf.into_inner(),
        }
    }
}
