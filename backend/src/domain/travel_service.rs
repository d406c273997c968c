//! Visit tracking domain service.
//!
//! Implements the driving ports on top of the three repositories. Failures
//! are logged with their raw detail here and leave the service as one of the
//! fixed messages in [`crate::domain::messages`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::messages::{
    ADD_MEMBER_FAILED, DELETE_FAILED, DUPLICATE_COUNTRY, EMPTY_COUNTRY, EMPTY_NAME,
    FETCH_FAILED, NO_USER_SELECTED, UNKNOWN_COUNTRY,
};
use crate::domain::ports::{
    CountryLookupError, CountryRepository, HomeQuery, TravelCommand, UserPersistenceError,
    UserRepository, VisitPersistenceError, VisitRecorded, VisitedCountryRepository,
};
use crate::domain::{
    CountryCode, CountryQuery, Error, HomeView, NewUser, UserId, UserValidationError,
};

/// Visit tracking service implementing [`HomeQuery`] and [`TravelCommand`].
pub struct TravelService<U, C, V> {
    users: Arc<U>,
    countries: Arc<C>,
    visits: Arc<V>,
}

impl<U, C, V> Clone for TravelService<U, C, V> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            countries: Arc::clone(&self.countries),
            visits: Arc::clone(&self.visits),
        }
    }
}

impl<U, C, V> TravelService<U, C, V> {
    /// Create a new service with the given repositories.
    #[must_use]
    pub const fn new(users: Arc<U>, countries: Arc<C>, visits: Arc<V>) -> Self {
        Self {
            users,
            countries,
            visits,
        }
    }
}

fn fetch_failed_from_users(error: UserPersistenceError) -> Error {
    warn!(%error, "home page user query failed");
    match error {
        UserPersistenceError::Connection { .. } => Error::service_unavailable(FETCH_FAILED),
        _ => Error::internal(FETCH_FAILED),
    }
}

fn fetch_failed_from_visits(error: VisitPersistenceError) -> Error {
    warn!(%error, "home page visit query failed");
    match error {
        VisitPersistenceError::Connection { .. } => Error::service_unavailable(FETCH_FAILED),
        _ => Error::internal(FETCH_FAILED),
    }
}

// Lookup and write failures share the unknown-country message on purpose:
// the page has always reported them that way.
fn add_failed_from_lookup(error: CountryLookupError) -> Error {
    warn!(%error, "country lookup failed");
    match error {
        CountryLookupError::Connection { .. } => Error::service_unavailable(UNKNOWN_COUNTRY),
        CountryLookupError::Query { .. } => Error::internal(UNKNOWN_COUNTRY),
    }
}

fn add_failed_from_visit(error: VisitPersistenceError) -> Error {
    warn!(%error, "recording visit failed");
    match error {
        VisitPersistenceError::Connection { .. } => Error::service_unavailable(UNKNOWN_COUNTRY),
        VisitPersistenceError::UnknownUser { .. } => Error::not_found(UNKNOWN_COUNTRY),
        VisitPersistenceError::Query { .. } => Error::internal(UNKNOWN_COUNTRY),
    }
}

fn create_failed(error: UserPersistenceError) -> Error {
    warn!(%error, "creating member failed");
    match error {
        UserPersistenceError::Connection { .. } => Error::service_unavailable(ADD_MEMBER_FAILED),
        UserPersistenceError::Query { .. } => Error::internal(ADD_MEMBER_FAILED),
    }
}

fn create_rejected(error: &UserValidationError) -> Error {
    match error {
        UserValidationError::EmptyName => Error::invalid_request(EMPTY_NAME),
        other => {
            debug!(error = %other, "member form rejected");
            Error::invalid_request(ADD_MEMBER_FAILED)
        }
    }
}

fn delete_failed(error: UserPersistenceError) -> Error {
    warn!(%error, "deleting member failed");
    match error {
        UserPersistenceError::Connection { .. } => Error::service_unavailable(DELETE_FAILED),
        _ => Error::internal(DELETE_FAILED),
    }
}

#[async_trait]
impl<U, C, V> HomeQuery for TravelService<U, C, V>
where
    U: UserRepository + 'static,
    C: CountryRepository + 'static,
    V: VisitedCountryRepository + 'static,
{
    async fn home(&self, current: Option<UserId>) -> Result<HomeView, Error> {
        let (visited, current_user) = match current {
            Some(id) => {
                let visited = self
                    .visits
                    .list_codes(&id)
                    .await
                    .map_err(fetch_failed_from_visits)?;
                let user = self
                    .users
                    .find_by_id(&id)
                    .await
                    .map_err(fetch_failed_from_users)?;
                (visited, user)
            }
            None => (Vec::new(), None),
        };
        let users = self
            .users
            .list_all()
            .await
            .map_err(fetch_failed_from_users)?;

        Ok(HomeView {
            visited,
            current: current_user,
            users,
        })
    }
}

#[async_trait]
impl<U, C, V> TravelCommand for TravelService<U, C, V>
where
    U: UserRepository + 'static,
    C: CountryRepository + 'static,
    V: VisitedCountryRepository + 'static,
{
    async fn add_visit(
        &self,
        current: Option<UserId>,
        country: &str,
    ) -> Result<CountryCode, Error> {
        let query = CountryQuery::new(country).map_err(|_| Error::invalid_request(EMPTY_COUNTRY))?;
        let user_id = current.ok_or_else(|| Error::invalid_request(NO_USER_SELECTED))?;

        let Some(matched) = self
            .countries
            .find_code_by_name(&query)
            .await
            .map_err(add_failed_from_lookup)?
        else {
            debug!(needle = query.needle(), "no country name matched");
            return Err(Error::not_found(UNKNOWN_COUNTRY));
        };

        let code = matched.into_map_region();
        match self
            .visits
            .record_visit(&user_id, &code)
            .await
            .map_err(add_failed_from_visit)?
        {
            VisitRecorded::Inserted => {
                debug!(%user_id, %code, "visit recorded");
                Ok(code)
            }
            VisitRecorded::AlreadyVisited => Err(Error::conflict(DUPLICATE_COUNTRY)),
        }
    }

    async fn create_user(&self, name: &str, color: &str) -> Result<UserId, Error> {
        let new_user = NewUser::try_from_form(name, color).map_err(|err| create_rejected(&err))?;
        let id = self.users.create(&new_user).await.map_err(create_failed)?;
        debug!(user_id = %id, "member created");
        Ok(id)
    }

    async fn delete_user(&self, current: Option<UserId>) -> Result<(), Error> {
        let user_id = current.ok_or_else(|| Error::invalid_request(NO_USER_SELECTED))?;
        self.users
            .delete_with_visits(&user_id)
            .await
            .map_err(delete_failed)?;
        debug!(%user_id, "member deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "travel_service_tests.rs"]
mod tests;
