//! Detail and list views of a doctor.

use serde::Serialize;

use crate::domain::doctor::{Doctor, Specialty};
use crate::dto::address::AddressView;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Full representation returned by create, get and update.
pub struct DoctorDetails {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub crm: String,
    pub phone: String,
    pub specialty: Specialty,
    pub address: AddressView,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Row of the paginated doctor listing.
pub struct DoctorListItem {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub crm: String,
    pub specialty: Specialty,
}

impl From<&Doctor> for DoctorDetails {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.get(),
            name: doctor.name.to_string(),
            email: doctor.email.to_string(),
            crm: doctor.crm.to_string(),
            phone: doctor.phone.to_string(),
            specialty: doctor.specialty,
            address: AddressView::from(&doctor.address),
            active: doctor.active,
        }
    }
}

impl From<Doctor> for DoctorListItem {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.get(),
            name: doctor.name.into_inner(),
            email: doctor.email.into_inner(),
            crm: doctor.crm.into_inner(),
            specialty: doctor.specialty,
        }
    }
}
