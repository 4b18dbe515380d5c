//! Request bodies accepted by the clinic endpoints.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod address;
pub mod doctor;
pub mod pagination;
pub mod patient;

#[derive(Debug, Error)]
/// Errors that can occur when processing request data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidField(#[from] TypeConstraintError),

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),
}
