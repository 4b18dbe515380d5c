use serde::{Deserialize, Serialize};

use crate::domain::types::{AddressLine, StateCode, ZipCode};

/// Postal address embedded in doctors and patients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: AddressLine,
    pub neighborhood: AddressLine,
    pub zip_code: ZipCode,
    pub city: AddressLine,
    pub state: StateCode,
    pub number: Option<String>,
    pub complement: Option<String>,
}

/// Sparse address changes; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateAddress {
    pub street: Option<AddressLine>,
    pub neighborhood: Option<AddressLine>,
    pub zip_code: Option<ZipCode>,
    pub city: Option<AddressLine>,
    pub state: Option<StateCode>,
    pub number: Option<String>,
    pub complement: Option<String>,
}

impl Address {
    /// Applies the provided sub-fields, leaving the others untouched.
    pub fn merge(&mut self, updates: &UpdateAddress) {
        if let Some(street) = &updates.street {
            self.street = street.clone();
        }
        if let Some(neighborhood) = &updates.neighborhood {
            self.neighborhood = neighborhood.clone();
        }
        if let Some(zip_code) = &updates.zip_code {
            self.zip_code = zip_code.clone();
        }
        if let Some(city) = &updates.city {
            self.city = city.clone();
        }
        if let Some(state) = &updates.state {
            self.state = state.clone();
        }
        if let Some(number) = &updates.number {
            self.number = Some(number.clone());
        }
        if let Some(complement) = &updates.complement {
            self.complement = Some(complement.clone());
        }
    }
}

/// Trims an optional free-text field and drops it when empty.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_address() -> Address {
        Address {
            street: AddressLine::new("Rua das Flores").unwrap(),
            neighborhood: AddressLine::new("Centro").unwrap(),
            zip_code: ZipCode::new("70000-000").unwrap(),
            city: AddressLine::new("Brasilia").unwrap(),
            state: StateCode::new("DF").unwrap(),
            number: Some("10".to_string()),
            complement: None,
        }
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut address = sample_address();
        let updates = UpdateAddress {
            city: Some(AddressLine::new("Goiania").unwrap()),
            complement: Some("Sala 2".to_string()),
            ..UpdateAddress::default()
        };

        address.merge(&updates);

        assert_eq!(address.city.as_str(), "Goiania");
        assert_eq!(address.complement.as_deref(), Some("Sala 2"));
        assert_eq!(address.street.as_str(), "Rua das Flores");
        assert_eq!(address.number.as_deref(), Some("10"));
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut address = sample_address();
        address.merge(&UpdateAddress::default());
        assert_eq!(address, sample_address());
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some(" 12 ".to_string())), Some("12".to_string()));
        assert_eq!(optional_text(None), None);
    }
}
