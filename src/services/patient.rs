//! Services backing the `/paciente` endpoints.

use crate::domain::patient::NewPatient;
use crate::domain::types::PatientId;
use crate::dto::patient::{PatientDetails, PatientListItem, PatientStatus};
use crate::forms::patient::{NewPatientForm, UpdatePatientForm, UpdatePatientPayload};
use crate::pagination::PagedModel;
use crate::repository::{PageRequest, PatientReader, PatientSort, PatientWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_patient<R>(repo: &R, form: NewPatientForm) -> ServiceResult<PatientDetails>
where
    R: PatientWriter + ?Sized,
{
    let new_patient = NewPatient::try_from(form)?;

    let patient = repo.create_patient(&new_patient).map_err(|err| {
        log::error!("Failed to create patient: {err}");
        err
    })?;

    log::info!("Registered patient {}", patient.id);
    Ok(PatientDetails::from(&patient))
}

/// Returns one page of active patients.
pub fn list_patients<R>(
    repo: &R,
    page: PageRequest<PatientSort>,
) -> ServiceResult<PagedModel<PatientListItem>>
where
    R: PatientReader + ?Sized,
{
    let (total, patients) = repo.list_active_patients(&page).map_err(|err| {
        log::error!("Failed to list patients: {err}");
        err
    })?;

    Ok(PagedModel::new(patients, page.page, page.size, total).map(PatientListItem::from))
}

pub fn get_patient<R>(repo: &R, patient_id: i32) -> ServiceResult<PatientDetails>
where
    R: PatientReader + ?Sized,
{
    let patient_id = PatientId::new(patient_id)?;

    let patient = repo
        .get_patient_by_id(patient_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(PatientDetails::from(&patient))
}

/// Reports whether the patient is active. Unknown ids are `NotFound`, never `false`.
pub fn patient_status<R>(repo: &R, patient_id: i32) -> ServiceResult<PatientStatus>
where
    R: PatientReader + ?Sized,
{
    let patient_id = PatientId::new(patient_id)?;

    let active = repo.find_active_by_id(patient_id)?;

    Ok(PatientStatus {
        id: patient_id.get(),
        active,
    })
}

pub fn update_patient<R>(repo: &R, form: UpdatePatientForm) -> ServiceResult<PatientDetails>
where
    R: PatientWriter + ?Sized,
{
    let UpdatePatientPayload { id, updates } = UpdatePatientPayload::try_from(form)?;

    let patient = repo.update_patient(id, &updates).map_err(|err| {
        log::error!("Failed to update patient {id}: {err}");
        err
    })?;

    Ok(PatientDetails::from(&patient))
}

pub fn deactivate_patient<R>(repo: &R, patient_id: i32) -> ServiceResult<()>
where
    R: PatientWriter + ?Sized,
{
    let patient_id = PatientId::new(patient_id)?;

    repo.deactivate_patient(patient_id).map_err(|err| {
        log::error!("Failed to deactivate patient {patient_id}: {err}");
        err
    })?;

    log::info!("Deactivated patient {patient_id}");
    Ok(())
}
