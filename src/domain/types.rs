//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, digit-only registration numbers) so that once a
//! value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Medical registration number is not 4 to 6 digits.
    #[error("crm must contain 4 to 6 digits")]
    InvalidCrm,
    /// Taxpayer number is not 11 digits.
    #[error("cpf must contain 11 digits")]
    InvalidCpf,
    /// Postal code is not 8 digits.
    #[error("zip code must contain 8 digits")]
    InvalidZipCode,
    /// State is not a two-letter code.
    #[error("state must be a two-letter code")]
    InvalidState,
    /// Specialty name is not one of the supported variants.
    #[error("unknown specialty: {0}")]
    UnknownSpecialty(String),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Strips the given separator characters and returns the remaining digits when
/// nothing else is left and the digit count is within `min..=max`.
fn digits_within(value: &str, separators: &[char], min: usize, max: usize) -> Option<String> {
    let digits: String = value
        .trim()
        .chars()
        .filter(|c| !separators.contains(c))
        .collect();
    let valid = (min..=max).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
    valid.then_some(digits)
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(DoctorId, "Unique identifier for a doctor.");
id_newtype!(PatientId, "Unique identifier for a patient.");

/// Macro for string wrappers that only differ in how the raw input is
/// normalized. `$normalize` maps `String` to `Result<String, TypeConstraintError>`.
macro_rules! string_newtype {
    ($name:ident, $doc:expr, $normalize:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validates and normalizes the raw value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let normalize: fn(String) -> Result<String, TypeConstraintError> = $normalize;
                Ok(Self(normalize(value.into())?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

fn non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed)
}

string_newtype!(
    PersonName,
    "Doctor or patient name enforcing trimmed, non-empty values.",
    non_empty
);

string_newtype!(
    AddressLine,
    "Street, neighborhood or city wrapper enforcing trimmed, non-empty values.",
    non_empty
);

string_newtype!(
    EmailAddress,
    "Lower-cased and validated email address.",
    normalize_email
);

string_newtype!(
    PhoneNumber,
    "Contact phone; digits with optional `+`, `(`, `)`, `-` and spaces.",
    |value| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        digits_within(&trimmed, &['+', '(', ')', '-', ' '], 8, 13)
            .map(|_| trimmed)
            .ok_or(TypeConstraintError::InvalidPhone)
    }
);

string_newtype!(
    Crm,
    "Medical council registration number, 4 to 6 digits.",
    |value| digits_within(&value, &[], 4, 6).ok_or(TypeConstraintError::InvalidCrm)
);

string_newtype!(
    Cpf,
    "Taxpayer number stored as 11 digits; `.` and `-` separators are stripped.",
    |value| digits_within(&value, &['.', '-'], 11, 11).ok_or(TypeConstraintError::InvalidCpf)
);

string_newtype!(
    ZipCode,
    "Postal code stored as 8 digits; a `-` separator is stripped.",
    |value| digits_within(&value, &['-'], 8, 8).ok_or(TypeConstraintError::InvalidZipCode)
);

string_newtype!(
    StateCode,
    "Upper-cased two-letter state code.",
    |value| {
        let code = value.trim().to_uppercase();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(code)
        } else {
            Err(TypeConstraintError::InvalidState)
        }
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(DoctorId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PatientId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(DoctorId::new(7).map(DoctorId::get), Ok(7));
    }

    #[test]
    fn email_is_normalized() {
        let email = EmailAddress::new("  Ana.Souza@Clinic.COM ").expect("valid email");
        assert_eq!(email.as_str(), "ana.souza@clinic.com");
        assert_eq!(
            EmailAddress::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(PersonName::new("  Ana Souza ").unwrap().as_str(), "Ana Souza");
        assert_eq!(PersonName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn phone_accepts_common_punctuation() {
        assert!(PhoneNumber::new("(61) 99999-8888").is_ok());
        assert!(PhoneNumber::new("+55 61 3333 4444").is_ok());
        assert_eq!(PhoneNumber::new("12ab5678"), Err(TypeConstraintError::InvalidPhone));
        assert_eq!(PhoneNumber::new("123"), Err(TypeConstraintError::InvalidPhone));
    }

    #[test]
    fn crm_requires_four_to_six_digits() {
        assert_eq!(Crm::new("123456").unwrap().as_str(), "123456");
        assert_eq!(Crm::new("123"), Err(TypeConstraintError::InvalidCrm));
        assert_eq!(Crm::new("12a45"), Err(TypeConstraintError::InvalidCrm));
    }

    #[test]
    fn cpf_and_zip_strip_separators() {
        assert_eq!(Cpf::new("123.456.789-09").unwrap().as_str(), "12345678909");
        assert_eq!(Cpf::new("1234567890"), Err(TypeConstraintError::InvalidCpf));
        assert_eq!(ZipCode::new("70000-000").unwrap().as_str(), "70000000");
        assert_eq!(ZipCode::new("7000"), Err(TypeConstraintError::InvalidZipCode));
    }

    #[test]
    fn state_is_upper_cased() {
        assert_eq!(StateCode::new("df").unwrap().as_str(), "DF");
        assert_eq!(StateCode::new("DFX"), Err(TypeConstraintError::InvalidState));
        assert_eq!(StateCode::new("D1"), Err(TypeConstraintError::InvalidState));
    }
}
