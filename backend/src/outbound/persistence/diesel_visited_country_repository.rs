//! PostgreSQL-backed `VisitedCountryRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{VisitPersistenceError, VisitRecorded, VisitedCountryRepository};
use crate::domain::{CountryCode, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::NewVisitRow;
use super::pool::{DbPool, PoolError};
use super::schema::visited_countries;

/// Diesel-backed implementation of the [`VisitedCountryRepository`] port.
#[derive(Clone)]
pub struct DieselVisitedCountryRepository {
    pool: DbPool,
}

impl DieselVisitedCountryRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> VisitPersistenceError {
    VisitPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(
    error: diesel::result::Error,
    operation: &str,
    user_id: &UserId,
) -> VisitPersistenceError {
    match classify_diesel_error(error, operation) {
        DieselFailure::Connection(message) => VisitPersistenceError::connection(message),
        DieselFailure::Query(message) => VisitPersistenceError::query(message),
        DieselFailure::ForeignKeyViolation => VisitPersistenceError::unknown_user(user_id.get()),
        DieselFailure::UniqueViolation => VisitPersistenceError::query("unique constraint violated"),
    }
}

#[async_trait]
impl VisitedCountryRepository for DieselVisitedCountryRepository {
    async fn list_codes(&self, user_id: &UserId) -> Result<Vec<CountryCode>, VisitPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let codes: Vec<String> = visited_countries::table
            .filter(visited_countries::user_id.eq(user_id.get()))
            .select(visited_countries::country_code)
            .order(visited_countries::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list visits", user_id))?;

        codes
            .iter()
            .map(|code| {
                CountryCode::new(code.trim())
                    .map_err(|err| VisitPersistenceError::query(err.to_string()))
            })
            .collect()
    }

    async fn record_visit(
        &self,
        user_id: &UserId,
        code: &CountryCode,
    ) -> Result<VisitRecorded, VisitPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewVisitRow {
            country_code: code.as_ref(),
            user_id: user_id.get(),
        };

        // Postgres rejects this conflict target unless the table has a unique
        // key on exactly these columns.
        let rows_affected = diesel::insert_into(visited_countries::table)
            .values(&new_row)
            .on_conflict((visited_countries::user_id, visited_countries::country_code))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "record visit", user_id))?;

        Ok(if rows_affected == 0 {
            VisitRecorded::AlreadyVisited
        } else {
            VisitRecorded::Inserted
        })
    }
}
