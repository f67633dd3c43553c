//! Diesel-backed repository for advocate records.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::db::{DbConnection, DbPool};
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::filter::{AdvocateFilter, SortOrder};
use crate::models::advocate::{
    Advocate as DbAdvocate, AdvocateSpecialty as DbAdvocateSpecialty, NewAdvocate as DbNewAdvocate,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AdvocateReader, AdvocateWriter};

#[derive(Clone)]
/// Diesel implementation of [`AdvocateReader`] and [`AdvocateWriter`].
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Load specialty rows for a page of advocates and rebuild domain
    /// records, keeping the stored display order.
    fn attach_specialties(
        conn: &mut DbConnection,
        rows: Vec<DbAdvocate>,
    ) -> RepositoryResult<Vec<Advocate>> {
        use crate::schema::advocate_specialties;

        let specialties = DbAdvocateSpecialty::belonging_to(&rows)
            .order(advocate_specialties::position.asc())
            .load::<DbAdvocateSpecialty>(conn)?
            .grouped_by(&rows);

        Ok(rows
            .into_iter()
            .zip(specialties)
            .map(|(row, specs)| row.into_domain(specs.into_iter().map(|s| s.specialty).collect()))
            .collect())
    }
}

/// Escape LIKE metacharacters so a query term is matched literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl AdvocateReader for DieselRepository {
    fn list(&self, filter: &AdvocateFilter) -> RepositoryResult<(usize, Vec<Advocate>)> {
        use crate::schema::{advocate_specialties, advocates};

        let mut conn = self.conn()?;

        let apply_filter = || {
            let mut query = advocates::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !filter.q.is_empty() {
                let pattern = format!("%{}%", escape_like(&filter.q));
                query = query.filter(advocates::search_text.like(pattern).escape('\\'));
            }

            if let Some(city) = &filter.city {
                query = query.filter(advocates::city.eq(city.clone()));
            }

            // Superset containment: one correlated EXISTS per requested
            // specialty, AND-combined.
            for specialty in &filter.specialties {
                query = query.filter(exists(
                    advocate_specialties::table
                        .filter(advocate_specialties::advocate_id.eq(advocates::id))
                        .filter(advocate_specialties::specialty.eq(specialty.clone())),
                ));
            }

            if filter.min_experience > 0 {
                query = query.filter(advocates::years_of_experience.ge(filter.min_experience));
            }

            query
        };

        // Full filtered-set cardinality, independent of the page.
        let total = apply_filter().count().get_result::<i64>(&mut conn)? as usize;

        let page_query = match filter.sort {
            SortOrder::Name => apply_filter()
                .order(advocates::last_name.asc())
                .then_order_by(advocates::first_name.asc()),
            SortOrder::Experience => apply_filter()
                .order(advocates::years_of_experience.desc())
                .then_order_by(advocates::last_name.asc()),
        };

        let offset = i64::try_from(filter.offset()).unwrap_or(i64::MAX);
        let rows = page_query
            .limit(filter.page_size as i64)
            .offset(offset)
            .load::<DbAdvocate>(&mut conn)?;

        let items = Self::attach_specialties(&mut conn, rows)?;

        Ok((total, items))
    }

    fn list_all(&self) -> RepositoryResult<Vec<Advocate>> {
        use crate::schema::advocates;

        let mut conn = self.conn()?;

        let rows = advocates::table
            .order(advocates::id.asc())
            .load::<DbAdvocate>(&mut conn)?;

        Self::attach_specialties(&mut conn, rows)
    }
}

impl AdvocateWriter for DieselRepository {
    fn create(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<Vec<Advocate>> {
        use crate::schema::{advocate_specialties, advocates};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut inserted = Vec::with_capacity(new_advocates.len());

            for new_advocate in new_advocates {
                let insertable: DbNewAdvocate = new_advocate.into();
                let row: DbAdvocate = diesel::insert_into(advocates::table)
                    .values(&insertable)
                    .get_result(conn)?;

                let specialty_rows: Vec<DbAdvocateSpecialty> = new_advocate
                    .specialties
                    .iter()
                    .enumerate()
                    .map(|(position, specialty)| DbAdvocateSpecialty {
                        advocate_id: row.id,
                        position: position as i32,
                        specialty: specialty.clone(),
                    })
                    .collect();

                diesel::insert_into(advocate_specialties::table)
                    .values(&specialty_rows)
                    .execute(conn)?;

                inserted.push(row.into_domain(new_advocate.specialties.clone()));
            }

            Ok(inserted)
        })
    }
}
