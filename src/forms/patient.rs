use serde::Deserialize;
use validator::Validate;

use crate::domain::address::UpdateAddress;
use crate::domain::patient::{NewPatient, UpdatePatient};
use crate::domain::types::{Cpf, EmailAddress, PatientId, PersonName, PhoneNumber};
use crate::forms::FormError;
use crate::forms::address::{AddressForm, UpdateAddressForm};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /paciente`.
pub struct NewPatientForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 20))]
    pub phone: String,
    /// `00000000000` or `000.000.000-00`.
    #[validate(length(min = 11, max = 14))]
    pub cpf: String,
    #[validate(nested)]
    pub address: AddressForm,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /paciente`.
pub struct UpdatePatientForm {
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,
    #[validate(nested)]
    pub address: Option<UpdateAddressForm>,
}

#[derive(Debug)]
pub struct UpdatePatientPayload {
    pub id: PatientId,
    pub updates: UpdatePatient,
}

impl TryFrom<NewPatientForm> for NewPatient {
    type Error = FormError;

    fn try_from(form: NewPatientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: PersonName::new(form.name)?,
            email: EmailAddress::new(form.email)?,
            phone: PhoneNumber::new(form.phone)?,
            cpf: Cpf::new(form.cpf)?,
            address: form.address.try_into()?,
        })
    }
}

impl TryFrom<UpdatePatientForm> for UpdatePatientPayload {
    type Error = FormError;

    fn try_from(form: UpdatePatientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            id: PatientId::new(form.id)?,
            updates: UpdatePatient {
                name: form.name.map(PersonName::new).transpose()?,
                phone: form.phone.map(PhoneNumber::new).transpose()?,
                address: form.address.map(UpdateAddress::try_from).transpose()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::address::tests::address_form;

    #[test]
    fn formatted_cpf_is_normalized() {
        let form = NewPatientForm {
            name: "Joao Lima".into(),
            email: "joao@example.com".into(),
            phone: "(61) 98888-7777".into(),
            cpf: "123.456.789-09".into(),
            address: address_form(),
        };
        let patient = NewPatient::try_from(form).expect("valid form");
        assert_eq!(patient.cpf.as_str(), "12345678909");
        assert_eq!(patient.phone.as_str(), "(61) 98888-7777");
    }

    #[test]
    fn nested_address_errors_surface() {
        let mut address = address_form();
        address.street = String::new();
        let form = NewPatientForm {
            name: "Joao Lima".into(),
            email: "joao@example.com".into(),
            phone: "61988887777".into(),
            cpf: "12345678909".into(),
            address,
        };
        assert!(matches!(
            NewPatient::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}
