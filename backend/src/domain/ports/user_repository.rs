//! Port abstraction for member persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for household members.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every member, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a member by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a member and return the generated id.
    async fn create(&self, user: &NewUser) -> Result<UserId, UserPersistenceError>;

    /// Remove a member together with all of their visits.
    ///
    /// Both removals happen atomically. Removing an id that does not exist
    /// is not an error.
    async fn delete_with_visits(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}
