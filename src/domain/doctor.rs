use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::address::{Address, UpdateAddress};
use crate::domain::types::{
    Crm, DoctorId, EmailAddress, PersonName, PhoneNumber, TypeConstraintError,
};

/// Medical specialties a doctor can be registered under.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    Orthopedics,
    Cardiology,
    Gynecology,
    Dermatology,
}

impl Specialty {
    /// Name persisted in the `specialty` column and used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Specialty::Orthopedics => "ORTHOPEDICS",
            Specialty::Cardiology => "CARDIOLOGY",
            Specialty::Gynecology => "GYNECOLOGY",
            Specialty::Dermatology => "DERMATOLOGY",
        }
    }
}

impl Display for Specialty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ORTHOPEDICS" => Ok(Specialty::Orthopedics),
            "CARDIOLOGY" => Ok(Specialty::Cardiology),
            "GYNECOLOGY" => Ok(Specialty::Gynecology),
            "DERMATOLOGY" => Ok(Specialty::Dermatology),
            other => Err(TypeConstraintError::UnknownSpecialty(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub crm: Crm,
    pub specialty: Specialty,
    pub address: Address,
    /// Cleared on soft delete; rows are never removed.
    pub active: bool,
}

/// Data required to register a doctor. New doctors always start active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub crm: Crm,
    pub specialty: Specialty,
    pub address: Address,
}

/// Sparse set of doctor changes. Email, CRM and specialty are immutable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateDoctor {
    pub name: Option<PersonName>,
    pub phone: Option<PhoneNumber>,
    pub address: Option<UpdateAddress>,
}

impl Doctor {
    /// Applies only the fields present in `updates`.
    pub fn merge(&mut self, updates: &UpdateDoctor) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(phone) = &updates.phone {
            self.phone = phone.clone();
        }
        if let Some(address) = &updates.address {
            self.address.merge(address);
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::tests::sample_address;
    use crate::domain::types::AddressLine;

    fn sample_doctor() -> Doctor {
        Doctor {
            id: DoctorId::new(1).unwrap(),
            name: PersonName::new("Ana Souza").unwrap(),
            email: EmailAddress::new("ana@voll.med").unwrap(),
            phone: PhoneNumber::new("61999998888").unwrap(),
            crm: Crm::new("123456").unwrap(),
            specialty: Specialty::Cardiology,
            address: sample_address(),
            active: true,
        }
    }

    #[test]
    fn merge_keeps_unspecified_fields() {
        let mut doctor = sample_doctor();
        let updates = UpdateDoctor {
            phone: Some(PhoneNumber::new("6133334444").unwrap()),
            ..UpdateDoctor::default()
        };

        doctor.merge(&updates);

        assert_eq!(doctor.phone.as_str(), "6133334444");
        assert_eq!(doctor.name.as_str(), "Ana Souza");
        assert_eq!(doctor.address, sample_address());
        assert!(doctor.active);
    }

    #[test]
    fn merge_is_idempotent() {
        let updates = UpdateDoctor {
            name: Some(PersonName::new("Ana S. Lima").unwrap()),
            address: Some(UpdateAddress {
                neighborhood: Some(AddressLine::new("Asa Sul").unwrap()),
                ..UpdateAddress::default()
            }),
            ..UpdateDoctor::default()
        };

        let mut once = sample_doctor();
        once.merge(&updates);
        let mut twice = once.clone();
        twice.merge(&updates);

        assert_eq!(once, twice);
        assert_eq!(twice.address.neighborhood.as_str(), "Asa Sul");
    }

    #[test]
    fn deactivate_clears_flag() {
        let mut doctor = sample_doctor();
        doctor.deactivate();
        assert!(!doctor.active);
    }

    #[test]
    fn specialty_round_trips_through_column_name() {
        for specialty in [
            Specialty::Orthopedics,
            Specialty::Cardiology,
            Specialty::Gynecology,
            Specialty::Dermatology,
        ] {
            assert_eq!(specialty.as_str().parse::<Specialty>(), Ok(specialty));
        }
        assert_eq!(
            "SURGERY".parse::<Specialty>(),
            Err(TypeConstraintError::UnknownSpecialty("SURGERY".to_string()))
        );
    }
}
