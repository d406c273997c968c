//! In-process store implementing every driven port.
//!
//! Used when no database is configured and by handler tests. It follows the
//! PostgreSQL adapters' semantics: ids are assigned sequentially from 1,
//! `(member, code)` pairs are unique, names may repeat, and deleting a
//! member drops their visits in the same critical section.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CountryLookupError, CountryRepository, UserPersistenceError, UserRepository,
    VisitPersistenceError, VisitRecorded, VisitedCountryRepository,
};
use crate::domain::{CountryCode, CountryQuery, NewUser, User, UserId};

/// Country names and codes loaded when no explicit list is given.
pub const SEED_COUNTRIES: &[(&str, &str)] = &[
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CN", "China"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GN", "Guinea"),
    ("GQ", "Equatorial Guinea"),
    ("GW", "Guinea-Bissau"),
    ("IN", "India"),
    ("IO", "British Indian Ocean Territory"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("MX", "Mexico"),
    ("NE", "Niger"),
    ("NG", "Nigeria"),
    ("PG", "Papua New Guinea"),
    ("US", "United States of America"),
];

#[derive(Debug, Clone)]
struct CountryEntry {
    code: CountryCode,
    name: String,
}

#[derive(Debug, Clone)]
struct VisitEntry {
    user_id: UserId,
    code: CountryCode,
}

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    next_user_id: i32,
    countries: Vec<CountryEntry>,
    visits: Vec<VisitEntry>,
}

/// Shared in-memory store. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Create a store with the given country reference data.
    ///
    /// Pairs with an invalid code are skipped.
    #[must_use]
    pub fn with_countries<'a>(countries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = countries
            .into_iter()
            .filter_map(|(raw_code, name)| {
                CountryCode::new(raw_code).ok().map(|code| CountryEntry {
                    code,
                    name: name.to_owned(),
                })
            })
            .collect();
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                countries: entries,
                ..MemoryState::default()
            })),
        }
    }

    /// Create a store preloaded with [`SEED_COUNTRIES`].
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::outbound::memory::{MemoryStore, SEED_COUNTRIES};
    ///
    /// let store = MemoryStore::seeded();
    /// assert_eq!(store.country_count(), Ok(SEED_COUNTRIES.len()));
    /// ```
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_countries(SEED_COUNTRIES.iter().copied())
    }

    /// Number of loaded countries.
    ///
    /// # Errors
    ///
    /// Fails when a panic poisoned the store's lock.
    pub fn country_count(&self) -> Result<usize, String> {
        self.lock().map(|state| state.countries.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, String> {
        self.state
            .lock()
            .map_err(|_| "memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state.users.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state.users.iter().find(|user| user.id() == *id).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<UserId, UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        let raw = state
            .next_user_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("member id sequence exhausted"))?;
        let id = UserId::new(raw).map_err(|err| UserPersistenceError::query(err.to_string()))?;
        state.next_user_id = raw;
        state.users.push(user.clone().into_user(id));
        Ok(id)
    }

    async fn delete_with_visits(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        state.visits.retain(|visit| visit.user_id != *id);
        state.users.retain(|user| user.id() != *id);
        Ok(())
    }
}

#[async_trait]
impl CountryRepository for MemoryStore {
    async fn find_code_by_name(
        &self,
        query: &CountryQuery,
    ) -> Result<Option<CountryCode>, CountryLookupError> {
        let state = self.lock().map_err(CountryLookupError::query)?;
        let best = state
            .countries
            .iter()
            .filter(|entry| query.matches(&entry.name))
            .min_by(|a, b| {
                let rank = |entry: &CountryEntry| {
                    (
                        !query.is_exact(&entry.name),
                        entry.name.chars().count(),
                    )
                };
                // Byte order, like `COLLATE "C"` in the SQL adapter.
                rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
            });
        Ok(best.map(|entry| entry.code.clone()))
    }
}

#[async_trait]
impl VisitedCountryRepository for MemoryStore {
    async fn list_codes(&self, user_id: &UserId) -> Result<Vec<CountryCode>, VisitPersistenceError> {
        let state = self.lock().map_err(VisitPersistenceError::query)?;
        Ok(state
            .visits
            .iter()
            .filter(|visit| visit.user_id == *user_id)
            .map(|visit| visit.code.clone())
            .collect())
    }

    async fn record_visit(
        &self,
        user_id: &UserId,
        code: &CountryCode,
    ) -> Result<VisitRecorded, VisitPersistenceError> {
        let mut state = self.lock().map_err(VisitPersistenceError::query)?;
        if !state.users.iter().any(|user| user.id() == *user_id) {
            return Err(VisitPersistenceError::unknown_user(user_id.get()));
        }
        if state
            .visits
            .iter()
            .any(|visit| visit.user_id == *user_id && visit.code == *code)
        {
            return Ok(VisitRecorded::AlreadyVisited);
        }
        state.visits.push(VisitEntry {
            user_id: *user_id,
            code: code.clone(),
        });
        Ok(VisitRecorded::Inserted)
    }
}
