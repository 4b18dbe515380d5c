//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::doctor::{Doctor, NewDoctor, UpdateDoctor};
use crate::domain::patient::{NewPatient, Patient, UpdatePatient};
use crate::domain::types::{DoctorId, PatientId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DoctorReader, DoctorSort, DoctorWriter, PageRequest, PatientReader, PatientSort,
    PatientWriter,
};

mock! {
    pub Repository {}

    impl DoctorReader for Repository {
        fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
        fn list_active_doctors(
            &self,
            page: &PageRequest<DoctorSort>,
        ) -> RepositoryResult<(usize, Vec<Doctor>)>;
    }

    impl DoctorWriter for Repository {
        fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
        fn update_doctor(&self, id: DoctorId, updates: &UpdateDoctor) -> RepositoryResult<Doctor>;
        fn deactivate_doctor(&self, id: DoctorId) -> RepositoryResult<Doctor>;
    }

    impl PatientReader for Repository {
        fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
        fn list_active_patients(
            &self,
            page: &PageRequest<PatientSort>,
        ) -> RepositoryResult<(usize, Vec<Patient>)>;
        fn find_active_by_id(&self, id: PatientId) -> RepositoryResult<bool>;
    }

    impl PatientWriter for Repository {
        fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
        fn update_patient(
            &self,
            id: PatientId,
            updates: &UpdatePatient,
        ) -> RepositoryResult<Patient>;
        fn deactivate_patient(&self, id: PatientId) -> RepositoryResult<Patient>;
    }
}
