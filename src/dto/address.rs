use serde::Serialize;

use crate::domain::address::Address;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub street: String,
    pub neighborhood: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub number: Option<String>,
    pub complement: Option<String>,
}

impl From<&Address> for AddressView {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.to_string(),
            neighborhood: address.neighborhood.to_string(),
            zip_code: address.zip_code.to_string(),
            city: address.city.to_string(),
            state: address.state.to_string(),
            number: address.number.clone(),
            complement: address.complement.clone(),
        }
    }
}
