//! PostgreSQL-backed country name search.

use async_trait::async_trait;
use diesel::OptionalExtension as _;
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CountryLookupError, CountryRepository};
use crate::domain::{CountryCode, CountryQuery};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::CountryCodeRow;
use super::pool::{DbPool, PoolError};

/// Diesel-backed implementation of the [`CountryRepository`] port.
#[derive(Clone)]
pub struct DieselCountryRepository {
    pool: DbPool,
}

impl DieselCountryRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// $1 is the escaped LIKE pattern, $2 the bare lower-cased needle. The final
// tie-break compares bytes (`COLLATE "C"`) so it matches the memory store
// whatever the database locale.
const FIND_CODE_SQL: &str = r#"
SELECT country_code
FROM countries
WHERE LOWER(country_name) LIKE $1 ESCAPE '\'
ORDER BY (LOWER(country_name) = $2) DESC,
         char_length(country_name) ASC,
         country_name COLLATE "C" ASC
LIMIT 1
"#;

fn map_pool_error(error: PoolError) -> CountryLookupError {
    CountryLookupError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> CountryLookupError {
    match classify_diesel_error(error, "find country") {
        DieselFailure::Connection(message) => CountryLookupError::connection(message),
        DieselFailure::Query(message) => CountryLookupError::query(message),
        DieselFailure::UniqueViolation | DieselFailure::ForeignKeyViolation => {
            CountryLookupError::query("unexpected constraint violation")
        }
    }
}

#[async_trait]
impl CountryRepository for DieselCountryRepository {
    async fn find_code_by_name(
        &self,
        query: &CountryQuery,
    ) -> Result<Option<CountryCode>, CountryLookupError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CountryCodeRow> = sql_query(FIND_CODE_SQL)
            .bind::<Text, _>(query.like_pattern())
            .bind::<Text, _>(query.needle())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|row| {
            CountryCode::new(row.country_code.trim())
                .map_err(|err| CountryLookupError::query(err.to_string()))
        })
        .transpose()
    }
}
