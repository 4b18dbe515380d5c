//! Response bodies returned by the clinic endpoints.

pub mod address;
pub mod doctor;
pub mod patient;
