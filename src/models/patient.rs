use diesel::prelude::*;

use crate::domain::patient::{NewPatient as DomainNewPatient, Patient as DomainPatient};
use crate::domain::types::{
    Cpf, EmailAddress, PatientId, PersonName, PhoneNumber, TypeConstraintError,
};
use crate::models::AddressRow;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::patients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::patient::Patient`].
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub street: String,
    pub neighborhood: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::patients)]
/// Insertable form of [`Patient`].
pub struct NewPatient<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub cpf: &'a str,
    pub street: &'a str,
    pub neighborhood: &'a str,
    pub zip_code: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub number: Option<&'a str>,
    pub complement: Option<&'a str>,
    pub active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::patients)]
#[diesel(treat_none_as_null = true)]
pub struct PatientChanges<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub street: &'a str,
    pub neighborhood: &'a str,
    pub zip_code: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub number: Option<&'a str>,
    pub complement: Option<&'a str>,
    pub active: bool,
}

impl TryFrom<Patient> for DomainPatient {
    type Error = TypeConstraintError;

    fn try_from(patient: Patient) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PatientId::try_from(patient.id)?,
            name: PersonName::new(patient.name)?,
            email: EmailAddress::new(patient.email)?,
            phone: PhoneNumber::new(patient.phone)?,
            cpf: Cpf::new(patient.cpf)?,
            address: AddressRow {
                street: patient.street,
                neighborhood: patient.neighborhood,
                zip_code: patient.zip_code,
                city: patient.city,
                state: patient.state,
                number: patient.number,
                complement: patient.complement,
            }
            .try_into()?,
            active: patient.active,
        })
    }
}

impl<'a> From<&'a DomainNewPatient> for NewPatient<'a> {
    fn from(patient: &'a DomainNewPatient) -> Self {
        Self {
            name: patient.name.as_str(),
            email: patient.email.as_str(),
            phone: patient.phone.as_str(),
            cpf: patient.cpf.as_str(),
            street: patient.address.street.as_str(),
            neighborhood: patient.address.neighborhood.as_str(),
            zip_code: patient.address.zip_code.as_str(),
            city: patient.address.city.as_str(),
            state: patient.address.state.as_str(),
            number: patient.address.number.as_deref(),
            complement: patient.address.complement.as_deref(),
            active: true,
        }
    }
}

impl<'a> From<&'a DomainPatient> for PatientChanges<'a> {
    fn from(patient: &'a DomainPatient) -> Self {
        Self {
            name: patient.name.as_str(),
            phone: patient.phone.as_str(),
            street: patient.address.street.as_str(),
            neighborhood: patient.address.neighborhood.as_str(),
            zip_code: patient.address.zip_code.as_str(),
            city: patient.address.city.as_str(),
            state: patient.address.state.as_str(),
            number: patient.address.number.as_deref(),
            complement: patient.address.complement.as_deref(),
            active: patient.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_into_domain() {
        let db = Patient {
            id: 9,
            name: "Joao Lima".into(),
            email: "JOAO@example.com".into(),
            phone: "61988887777".into(),
            cpf: "12345678909".into(),
            street: "Quadra 1".into(),
            neighborhood: "Asa Norte".into(),
            zip_code: "70000000".into(),
            city: "Brasilia".into(),
            state: "df".into(),
            number: Some("3".into()),
            complement: None,
            active: true,
        };
        let domain = DomainPatient::try_from(db).expect("valid patient");
        assert_eq!(domain.id.get(), 9);
        assert_eq!(domain.email.as_str(), "joao@example.com");
        assert_eq!(domain.address.state.as_str(), "DF");
        assert!(domain.active);

        let changes: PatientChanges = (&domain).into();
        assert_eq!(changes.number, Some("3"));
        assert!(changes.active);
    }
}
