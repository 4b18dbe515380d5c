use serde::Deserialize;
use validator::Validate;

use crate::domain::address::UpdateAddress;
use crate::domain::doctor::{NewDoctor, Specialty, UpdateDoctor};
use crate::domain::types::{Crm, DoctorId, EmailAddress, PersonName, PhoneNumber};
use crate::forms::FormError;
use crate::forms::address::{AddressForm, UpdateAddressForm};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /medico`.
pub struct NewDoctorForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 20))]
    pub phone: String,
    /// Medical council registration, 4 to 6 digits.
    #[validate(length(min = 4, max = 6))]
    pub crm: String,
    pub specialty: Specialty,
    #[validate(nested)]
    pub address: AddressForm,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /medico`. Only `id` is required.
pub struct UpdateDoctorForm {
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,
    #[validate(nested)]
    pub address: Option<UpdateAddressForm>,
}

/// Validated doctor update bound to its target.
#[derive(Debug)]
pub struct UpdateDoctorPayload {
    pub id: DoctorId,
    pub updates: UpdateDoctor,
}

impl TryFrom<NewDoctorForm> for NewDoctor {
    type Error = FormError;

    fn try_from(form: NewDoctorForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: PersonName::new(form.name)?,
            email: EmailAddress::new(form.email)?,
            phone: PhoneNumber::new(form.phone)?,
            crm: Crm::new(form.crm)?,
            specialty: form.specialty,
            address: form.address.try_into()?,
        })
    }
}

impl TryFrom<UpdateDoctorForm> for UpdateDoctorPayload {
    type Error = FormError;

    fn try_from(form: UpdateDoctorForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            id: DoctorId::new(form.id)?,
            updates: UpdateDoctor {
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

    fn new_doctor_form() -> NewDoctorForm {
        NewDoctorForm {
            name: " Ana Souza ".into(),
            email: "Ana@Voll.Med".into(),
            phone: "61999998888".into(),
            crm: "123456".into(),
            specialty: Specialty::Cardiology,
            address: address_form(),
        }
    }

    #[test]
    fn new_doctor_form_into_domain() {
        let doctor = NewDoctor::try_from(new_doctor_form()).expect("valid form");
        assert_eq!(doctor.name.as_str(), "Ana Souza");
        assert_eq!(doctor.email.as_str(), "ana@voll.med");
        assert_eq!(doctor.specialty, Specialty::Cardiology);
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut form = new_doctor_form();
        form.email = "ana".into();
        assert!(matches!(
            NewDoctor::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn non_numeric_crm_is_rejected() {
        let mut form = new_doctor_form();
        form.crm = "12ab".into();
        assert!(matches!(
            NewDoctor::try_from(form),
            Err(FormError::InvalidField(_))
        ));
    }

    #[test]
    fn camel_case_body_deserializes() {
        let form: NewDoctorForm = serde_json::from_value(serde_json::json!({
            "name": "Ana Souza",
            "email": "ana@voll.med",
            "phone": "61999998888",
            "crm": "123456",
            "specialty": "ORTHOPEDICS",
            "address": {
                "street": "Rua das Flores",
                "neighborhood": "Centro",
                "zipCode": "70000000",
                "city": "Brasilia",
                "state": "DF"
            }
        }))
        .expect("well-formed body");
        assert_eq!(form.specialty, Specialty::Orthopedics);
        assert_eq!(form.address.number, None);
    }

    #[test]
    fn update_form_with_only_id_changes_nothing() {
        let form = UpdateDoctorForm {
            id: 5,
            name: None,
            phone: None,
            address: None,
        };
        let payload = UpdateDoctorPayload::try_from(form).expect("valid update");
        assert_eq!(payload.id.get(), 5);
        assert_eq!(payload.updates, UpdateDoctor::default());
    }

    #[test]
    fn update_form_requires_positive_id() {
        let form = UpdateDoctorForm {
            id: 0,
            name: Some("Ana".into()),
            phone: None,
            address: None,
        };
        assert!(matches!(
            UpdateDoctorPayload::try_from(form),
            Err(FormError::InvalidField(_))
        ));
    }
}
