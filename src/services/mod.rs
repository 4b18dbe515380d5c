pub mod doctor;
pub mod errors;
pub mod patient;

pub use errors::{ServiceError, ServiceResult};
