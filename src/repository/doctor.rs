//! Repository implementation for doctors.

use diesel::{Connection, prelude::*, sqlite::Sqlite};

use crate::{
    domain::{
        doctor::{Doctor, NewDoctor, UpdateDoctor},
        types::DoctorId,
    },
    models::doctor::{Doctor as DbDoctor, DoctorChanges, NewDoctor as DbNewDoctor},
    repository::{
        DieselRepository, DoctorReader, DoctorSort, DoctorWriter, PageRequest, SortDirection,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::doctors,
};

type BoxedDoctorQuery<'a> = doctors::BoxedQuery<'a, Sqlite>;

macro_rules! order_by {
    ($query:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Asc => $query.then_order_by($column.asc()),
            SortDirection::Desc => $query.then_order_by($column.desc()),
        }
    };
}

fn apply_ordering<'a>(
    mut query: BoxedDoctorQuery<'a>,
    page: &PageRequest<DoctorSort>,
) -> BoxedDoctorQuery<'a> {
    for order in page.ordering() {
        query = match order.field {
            DoctorSort::Id => order_by!(query, doctors::id, order.direction),
            DoctorSort::Name => order_by!(query, doctors::name, order.direction),
            DoctorSort::Email => order_by!(query, doctors::email, order.direction),
            DoctorSort::Crm => order_by!(query, doctors::crm, order.direction),
            DoctorSort::Specialty => order_by!(query, doctors::specialty, order.direction),
        };
    }
    query
}

impl DieselRepository {
    /// Loads a doctor, applies `apply` and writes the result back, all inside
    /// one transaction. A missing row rolls back with `NotFound`.
    fn mutate_doctor<F>(&self, id: DoctorId, apply: F) -> RepositoryResult<Doctor>
    where
        F: FnOnce(&mut Doctor),
    {
        let mut conn = self.conn()?;

        conn.transaction::<Doctor, RepositoryError, _>(|conn| {
            let current = doctors::table
                .find(id.get())
                .first::<DbDoctor>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let mut doctor = Doctor::try_from(current)?;
            apply(&mut doctor);

            let saved = diesel::update(doctors::table.find(id.get()))
                .set(&DoctorChanges::from(&doctor))
                .get_result::<DbDoctor>(conn)?;

            Ok(Doctor::try_from(saved)?)
        })
    }
}

impl DoctorReader for DieselRepository {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        let mut conn = self.conn()?;
        let db_doctor = doctors::table
            .find(id.get())
            .first::<DbDoctor>(&mut conn)
            .optional()?;

        match db_doctor {
            Some(db_doctor) => Ok(Some(
                Doctor::try_from(db_doctor).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_active_doctors(
        &self,
        page: &PageRequest<DoctorSort>,
    ) -> RepositoryResult<(usize, Vec<Doctor>)> {
        let mut conn = self.conn()?;

        let total: i64 = doctors::table
            .filter(doctors::active.eq(true))
            .count()
            .get_result(&mut conn)?;

        let query = doctors::table
            .filter(doctors::active.eq(true))
            .into_boxed();

        let items = apply_ordering(query, page)
            .limit(page.limit())
            .offset(page.offset())
            .load::<DbDoctor>(&mut conn)?
            .into_iter()
            .map(|db_doctor| Doctor::try_from(db_doctor).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        Ok((total as usize, items))
    }
}

impl DoctorWriter for DieselRepository {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor> {
        let mut conn = self.conn()?;
        let db_new_doctor: DbNewDoctor = new_doctor.into();

        conn.transaction::<Doctor, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(doctors::table)
                .values(&db_new_doctor)
                .get_result::<DbDoctor>(conn)?;

            Ok(Doctor::try_from(created)?)
        })
    }

    fn update_doctor(&self, id: DoctorId, updates: &UpdateDoctor) -> RepositoryResult<Doctor> {
        self.mutate_doctor(id, |doctor| doctor.merge(updates))
    }

    fn deactivate_doctor(&self, id: DoctorId) -> RepositoryResult<Doctor> {
        self.mutate_doctor(id, Doctor::deactivate)
    }
}
