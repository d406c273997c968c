//! Port for read-only country reference data.
use async_trait::async_trait;

use crate::domain::{CountryCode, CountryQuery};

use super::define_port_error;

define_port_error! {
    /// Errors raised by country lookup adapters.
    pub enum CountryLookupError {
        /// Repository connection could not be established.
        Connection { message: String } => "country repository connection failed: {message}",
        /// Query failed or returned unusable data.
        Query { message: String } => "country repository query failed: {message}",
    }
}

/// Country name search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Resolve the code of a country whose name contains the query.
    ///
    /// When several names match, an exact case-insensitive match wins, then
    /// the shortest name, then alphabetical order. Returns `None` when no
    /// name matches.
    async fn find_code_by_name(
        &self,
        query: &CountryQuery,
    ) -> Result<Option<CountryCode>, CountryLookupError>;
}
