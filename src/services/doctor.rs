//! Services backing the `/medico` endpoints.

use crate::domain::doctor::NewDoctor;
use crate::domain::types::DoctorId;
use crate::dto::doctor::{DoctorDetails, DoctorListItem};
use crate::forms::doctor::{NewDoctorForm, UpdateDoctorForm, UpdateDoctorPayload};
use crate::pagination::PagedModel;
use crate::repository::{DoctorReader, DoctorSort, DoctorWriter, PageRequest};
use crate::services::{ServiceError, ServiceResult};

/// Validates the form and registers a new, active doctor.
pub fn create_doctor<R>(repo: &R, form: NewDoctorForm) -> ServiceResult<DoctorDetails>
where
    R: DoctorWriter + ?Sized,
{
    let new_doctor = NewDoctor::try_from(form)?;

    let doctor = repo.create_doctor(&new_doctor).map_err(|err| {
        log::error!("Failed to create doctor: {err}");
        err
    })?;

    log::info!("Registered doctor {} with crm {}", doctor.id, doctor.crm);
    Ok(DoctorDetails::from(&doctor))
}

/// Returns one page of active doctors.
pub fn list_doctors<R>(
    repo: &R,
    page: PageRequest<DoctorSort>,
) -> ServiceResult<PagedModel<DoctorListItem>>
where
    R: DoctorReader + ?Sized,
{
    let (total, doctors) = repo.list_active_doctors(&page).map_err(|err| {
        log::error!("Failed to list doctors: {err}");
        err
    })?;

    Ok(PagedModel::new(doctors, page.page, page.size, total).map(DoctorListItem::from))
}

/// Loads a doctor regardless of its active flag.
pub fn get_doctor<R>(repo: &R, doctor_id: i32) -> ServiceResult<DoctorDetails>
where
    R: DoctorReader + ?Sized,
{
    let doctor_id = DoctorId::new(doctor_id)?;

    let doctor = repo
        .get_doctor_by_id(doctor_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(DoctorDetails::from(&doctor))
}

/// Applies the non-empty members of the form to an existing doctor.
pub fn update_doctor<R>(repo: &R, form: UpdateDoctorForm) -> ServiceResult<DoctorDetails>
where
    R: DoctorWriter + ?Sized,
{
    let UpdateDoctorPayload { id, updates } = UpdateDoctorPayload::try_from(form)?;

    let doctor = repo.update_doctor(id, &updates).map_err(|err| {
        log::error!("Failed to update doctor {id}: {err}");
        err
    })?;

    Ok(DoctorDetails::from(&doctor))
}

/// Soft-deletes a doctor; the row stays readable by id.
pub fn deactivate_doctor<R>(repo: &R, doctor_id: i32) -> ServiceResult<()>
where
    R: DoctorWriter + ?Sized,
{
    let doctor_id = DoctorId::new(doctor_id)?;

    repo.deactivate_doctor(doctor_id).map_err(|err| {
        log::error!("Failed to deactivate doctor {doctor_id}: {err}");
        err
    })?;

    log::info!("Deactivated doctor {doctor_id}");
    Ok(())
}
