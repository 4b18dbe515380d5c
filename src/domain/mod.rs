//! Domain aggregates exposed by the clinic service layer.

pub mod address;
pub mod doctor;
pub mod patient;
pub mod types;
