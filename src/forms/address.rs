use serde::Deserialize;
use validator::Validate;

use crate::domain::address::{Address, UpdateAddress, optional_text};
use crate::domain::types::{AddressLine, StateCode, ZipCode};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Full address supplied on registration.
pub struct AddressForm {
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    #[validate(length(min = 1, max = 100))]
    pub neighborhood: String,
    /// `00000000` or `00000-000`.
    #[validate(length(min = 8, max = 9))]
    pub zip_code: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(equal = 2))]
    pub state: String,
    pub number: Option<String>,
    pub complement: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Address changes; omitted or `null` members keep their stored value.
pub struct UpdateAddressForm {
    #[validate(length(min = 1, max = 200))]
    pub street: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub neighborhood: Option<String>,
    #[validate(length(min = 8, max = 9))]
    pub zip_code: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(equal = 2))]
    pub state: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
}

impl TryFrom<AddressForm> for Address {
    type Error = FormError;

    fn try_from(form: AddressForm) -> Result<Self, Self::Error> {
        Ok(Self {
            street: AddressLine::new(form.street)?,
            neighborhood: AddressLine::new(form.neighborhood)?,
            zip_code: ZipCode::new(form.zip_code)?,
            city: AddressLine::new(form.city)?,
            state: StateCode::new(form.state)?,
            number: optional_text(form.number),
            complement: optional_text(form.complement),
        })
    }
}

impl TryFrom<UpdateAddressForm> for UpdateAddress {
    type Error = FormError;

    fn try_from(form: UpdateAddressForm) -> Result<Self, Self::Error> {
        Ok(Self {
            street: form.street.map(AddressLine::new).transpose()?,
            neighborhood: form.neighborhood.map(AddressLine::new).transpose()?,
            zip_code: form.zip_code.map(ZipCode::new).transpose()?,
            city: form.city.map(AddressLine::new).transpose()?,
            state: form.state.map(StateCode::new).transpose()?,
            number: optional_text(form.number),
            complement: optional_text(form.complement),
        })
    }
}
