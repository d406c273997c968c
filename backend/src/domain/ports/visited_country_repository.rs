//! Port for the member-to-country visit association.
use async_trait::async_trait;

use crate::domain::{CountryCode, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by visit repository adapters.
    pub enum VisitPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "visit repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "visit repository query failed: {message}",
        /// The visit references a member that does not exist.
        UnknownUser { user_id: i32 } => "member {user_id} does not exist",
    }
}

/// Result of recording a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitRecorded {
    /// A new row was stored.
    Inserted,
    /// The member already had this country; nothing changed.
    AlreadyVisited,
}

/// Storage for visited countries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitedCountryRepository: Send + Sync {
    /// Codes visited by a member, in insertion order.
    async fn list_codes(&self, user_id: &UserId) -> Result<Vec<CountryCode>, VisitPersistenceError>;

    /// Record a visit. Uniqueness of `(user, code)` is enforced by the store,
    /// so concurrent duplicates resolve to [`VisitRecorded::AlreadyVisited`].
    /// The PostgreSQL adapter needs the unique key created by the embedded
    /// migrations.
    async fn record_visit(
        &self,
        user_id: &UserId,
        code: &CountryCode,
    ) -> Result<VisitRecorded, VisitPersistenceError>;
}
