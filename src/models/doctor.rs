use diesel::prelude::*;

use crate::domain::doctor::{Doctor as DomainDoctor, NewDoctor as DomainNewDoctor};
use crate::domain::types::{
    Crm, DoctorId, EmailAddress, PersonName, PhoneNumber, TypeConstraintError,
};
use crate::models::AddressRow;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::doctors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::doctor::Doctor`].
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub crm: String,
    pub specialty: String,
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
#[diesel(table_name = crate::schema::doctors)]
/// Insertable form of [`Doctor`].
pub struct NewDoctor<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub crm: &'a str,
    pub specialty: &'a str,
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
#[diesel(table_name = crate::schema::doctors)]
#[diesel(treat_none_as_null = true)]
/// Full set of mutable columns written back after a merge or deactivation.
pub struct DoctorChanges<'a> {
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

impl TryFrom<Doctor> for DomainDoctor {
    type Error = TypeConstraintError;

    fn try_from(doctor: Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DoctorId::try_from(doctor.id)?,
            name: PersonName::new(doctor.name)?,
            email: EmailAddress::new(doctor.email)?,
            phone: PhoneNumber::new(doctor.phone)?,
            crm: Crm::new(doctor.crm)?,
            specialty: doctor.specialty.parse()?,
            address: AddressRow {
                street: doctor.street,
                neighborhood: doctor.neighborhood,
                zip_code: doctor.zip_code,
                city: doctor.city,
                state: doctor.state,
                number: doctor.number,
                complement: doctor.complement,
            }
            .try_into()?,
            active: doctor.active,
        })
    }
}

impl<'a> From<&'a DomainNewDoctor> for NewDoctor<'a> {
    fn from(doctor: &'a DomainNewDoctor) -> Self {
        Self {
            name: doctor.name.as_str(),
            email: doctor.email.as_str(),
            phone: doctor.phone.as_str(),
            crm: doctor.crm.as_str(),
            specialty: doctor.specialty.as_str(),
            street: doctor.address.street.as_str(),
            neighborhood: doctor.address.neighborhood.as_str(),
            zip_code: doctor.address.zip_code.as_str(),
            city: doctor.address.city.as_str(),
            state: doctor.address.state.as_str(),
            number: doctor.address.number.as_deref(),
            complement: doctor.address.complement.as_deref(),
            active: true,
        }
    }
}

impl<'a> From<&'a DomainDoctor> for DoctorChanges<'a> {
    fn from(doctor: &'a DomainDoctor) -> Self {
        Self {
            name: doctor.name.as_str(),
            phone: doctor.phone.as_str(),
            street: doctor.address.street.as_str(),
            neighborhood: doctor.address.neighborhood.as_str(),
            zip_code: doctor.address.zip_code.as_str(),
            city: doctor.address.city.as_str(),
            state: doctor.address.state.as_str(),
            number: doctor.address.number.as_deref(),
            complement: doctor.address.complement.as_deref(),
            active: doctor.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::tests::sample_address;
    use crate::domain::doctor::Specialty;

    fn db_doctor() -> Doctor {
        Doctor {
            id: 4,
            name: "Ana Souza".into(),
            email: "ana@voll.med".into(),
            phone: "61999998888".into(),
            crm: "123456".into(),
            specialty: "DERMATOLOGY".into(),
            street: "Rua das Flores".into(),
            neighborhood: "Centro".into(),
            zip_code: "70000000".into(),
            city: "Brasilia".into(),
            state: "DF".into(),
            number: None,
            complement: Some("Sala 1".into()),
            active: false,
        }
    }

    #[test]
    fn doctor_into_domain() {
        let domain = DomainDoctor::try_from(db_doctor()).expect("valid doctor");
        assert_eq!(domain.id.get(), 4);
        assert_eq!(domain.specialty, Specialty::Dermatology);
        assert_eq!(domain.address.zip_code.as_str(), "70000000");
        assert_eq!(domain.address.complement.as_deref(), Some("Sala 1"));
        assert!(!domain.active);
    }

    #[test]
    fn corrupt_row_is_rejected() {
        let mut row = db_doctor();
        row.specialty = "ASTROLOGY".into();
        assert!(DomainDoctor::try_from(row).is_err());
    }

    #[test]
    fn from_domain_new_creates_active_row() {
        let domain = DomainNewDoctor {
            name: PersonName::new("Ana Souza").unwrap(),
            email: EmailAddress::new("ana@voll.med").unwrap(),
            phone: PhoneNumber::new("61999998888").unwrap(),
            crm: Crm::new("123456").unwrap(),
            specialty: Specialty::Orthopedics,
            address: sample_address(),
        };
        let new: NewDoctor = (&domain).into();
        assert_eq!(new.name, "Ana Souza");
        assert_eq!(new.specialty, "ORTHOPEDICS");
        assert_eq!(new.number, Some("10"));
        assert!(new.active);
    }

    #[test]
    fn changes_carry_active_flag() {
        let mut domain = DomainDoctor::try_from(db_doctor()).unwrap();
        domain.active = true;
        let changes: DoctorChanges = (&domain).into();
        assert!(changes.active);
        assert_eq!(changes.complement, Some("Sala 1"));
        assert_eq!(changes.number, None);
    }
}
