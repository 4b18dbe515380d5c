//! Repository implementation for patients.

use diesel::{Connection, prelude::*, sqlite::Sqlite};

use crate::{
    domain::{
        patient::{NewPatient, Patient, UpdatePatient},
        types::PatientId,
    },
    models::patient::{NewPatient as DbNewPatient, Patient as DbPatient, PatientChanges},
    repository::{
        DieselRepository, PageRequest, PatientReader, PatientSort, PatientWriter, SortDirection,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::patients,
};

type BoxedPatientQuery<'a> = patients::BoxedQuery<'a, Sqlite>;

macro_rules! order_by {
    ($query:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Asc => $query.then_order_by($column.asc()),
            SortDirection::Desc => $query.then_order_by($column.desc()),
        }
    };
}

fn apply_ordering<'a>(
    mut query: BoxedPatientQuery<'a>,
    page: &PageRequest<PatientSort>,
) -> BoxedPatientQuery<'a> {
    for order in page.ordering() {
        query = match order.field {
            PatientSort::Id => order_by!(query, patients::id, order.direction),
            PatientSort::Name => order_by!(query, patients::name, order.direction),
            PatientSort::Email => order_by!(query, patients::email, order.direction),
            PatientSort::Cpf => order_by!(query, patients::cpf, order.direction),
        };
    }
    query
}

impl DieselRepository {
    fn mutate_patient<F>(&self, id: PatientId, apply: F) -> RepositoryResult<Patient>
    where
        F: FnOnce(&mut Patient),
    {
        let mut conn = self.conn()?;

        conn.transaction::<Patient, RepositoryError, _>(|conn| {
            let current = patients::table
                .find(id.get())
                .first::<DbPatient>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let mut patient = Patient::try_from(current)?;
            apply(&mut patient);

            let saved = diesel::update(patients::table.find(id.get()))
                .set(&PatientChanges::from(&patient))
                .get_result::<DbPatient>(conn)?;

            Ok(Patient::try_from(saved)?)
        })
    }
}

impl PatientReader for DieselRepository {
    fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>> {
        let mut conn = self.conn()?;
        let db_patient = patients::table
            .find(id.get())
            .first::<DbPatient>(&mut conn)
            .optional()?;

        match db_patient {
            Some(db_patient) => Ok(Some(
                Patient::try_from(db_patient).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_active_patients(
        &self,
        page: &PageRequest<PatientSort>,
    ) -> RepositoryResult<(usize, Vec<Patient>)> {
        let mut conn = self.conn()?;

        let total: i64 = patients::table
            .filter(patients::active.eq(true))
            .count()
            .get_result(&mut conn)?;

        let query = patients::table
            .filter(patients::active.eq(true))
            .into_boxed();

        let items = apply_ordering(query, page)
            .limit(page.limit())
            .offset(page.offset())
            .load::<DbPatient>(&mut conn)?
            .into_iter()
            .map(|db_patient| Patient::try_from(db_patient).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        Ok((total as usize, items))
    }

    fn find_active_by_id(&self, id: PatientId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        // `first` reports a missing row as `NotFound`.
        let active = patients::table
            .find(id.get())
            .select(patients::active)
            .first::<bool>(&mut conn)?;

        Ok(active)
    }
}

impl PatientWriter for DieselRepository {
    fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient> {
        let mut conn = self.conn()?;
        let db_new_patient: DbNewPatient = new_patient.into();

        conn.transaction::<Patient, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(patients::table)
                .values(&db_new_patient)
                .get_result::<DbPatient>(conn)?;

            Ok(Patient::try_from(created)?)
        })
    }

    fn update_patient(
        &self,
        id: PatientId,
        updates: &UpdatePatient,
    ) -> RepositoryResult<Patient> {
        self.mutate_patient(id, |patient| patient.merge(updates))
    }

    fn deactivate_patient(&self, id: PatientId) -> RepositoryResult<Patient> {
        self.mutate_patient(id, Patient::deactivate)
    }
}
