use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        doctor::{Doctor, NewDoctor, UpdateDoctor},
        patient::{NewPatient, Patient, UpdatePatient},
        types::{DoctorId, PatientId},
    },
    repository::errors::RepositoryResult,
};

pub mod doctor;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod patient;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Column a listing may be ordered by. Implementors whitelist their columns.
pub trait SortField: Copy + PartialEq {
    /// Resolves a wire-level field name.
    fn from_name(name: &str) -> Option<Self>;
    /// The primary key column, appended as the final tiebreaker.
    fn id() -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Zero-based page request with an ordered list of sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<F> {
    pub page: usize,
    pub size: usize,
    pub sort: Vec<SortOrder<F>>,
}

impl<F: SortField> PageRequest<F> {
    /// Builds a request, clamping `size` to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: Vec::new(),
        }
    }

    pub fn sort_by(mut self, field: F, direction: SortDirection) -> Self {
        self.sort.push(SortOrder { field, direction });
        self
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }

    /// Rows to skip. Saturates at `i64::MAX` so far-off pages come back empty.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.page)
            .ok()
            .and_then(|page| page.checked_mul(self.limit()))
            .unwrap_or(i64::MAX)
    }

    /// Requested ordering followed by `id ASC` unless the id is already a key.
    pub fn ordering(&self) -> Vec<SortOrder<F>> {
        let mut ordering = self.sort.clone();
        if !ordering.iter().any(|order| order.field == F::id()) {
            ordering.push(SortOrder {
                field: F::id(),
                direction: SortDirection::Asc,
            });
        }
        ordering
    }
}

impl<F: SortField> Default for PageRequest<F> {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorSort {
    Id,
    Name,
    Email,
    Crm,
    Specialty,
}

impl SortField for DoctorSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(DoctorSort::Id),
            "name" => Some(DoctorSort::Name),
            "email" => Some(DoctorSort::Email),
            "crm" => Some(DoctorSort::Crm),
            "specialty" => Some(DoctorSort::Specialty),
            _ => None,
        }
    }

    fn id() -> Self {
        DoctorSort::Id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientSort {
    Id,
    Name,
    Email,
    Cpf,
}

impl SortField for PatientSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(PatientSort::Id),
            "name" => Some(PatientSort::Name),
            "email" => Some(PatientSort::Email),
            "cpf" => Some(PatientSort::Cpf),
            _ => None,
        }
    }

    fn id() -> Self {
        PatientSort::Id
    }
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait DoctorReader {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
    /// Active doctors only, with the total count of active rows.
    fn list_active_doctors(
        &self,
        page: &PageRequest<DoctorSort>,
    ) -> RepositoryResult<(usize, Vec<Doctor>)>;
}

pub trait DoctorWriter {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
    fn update_doctor(&self, id: DoctorId, updates: &UpdateDoctor) -> RepositoryResult<Doctor>;
    fn deactivate_doctor(&self, id: DoctorId) -> RepositoryResult<Doctor>;
}

pub trait PatientReader {
    fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
    fn list_active_patients(
        &self,
        page: &PageRequest<PatientSort>,
    ) -> RepositoryResult<(usize, Vec<Patient>)>;
    /// The stored `active` flag; [`errors::RepositoryError::NotFound`] when no row matches.
    fn find_active_by_id(&self, id: PatientId) -> RepositoryResult<bool>;
}

pub trait PatientWriter {
    fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
    fn update_patient(&self, id: PatientId, updates: &UpdatePatient)
    -> RepositoryResult<Patient>;
    fn deactivate_patient(&self, id: PatientId) -> RepositoryResult<Patient>;
}
