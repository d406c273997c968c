//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserId;
use crate::domain::ports::{HomeQuery, TravelCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Home page read model.
    pub home: Arc<dyn HomeQuery>,
    /// Visit and member mutations.
    pub commands: Arc<dyn TravelCommand>,
    /// Member selected for clients that never chose one.
    pub default_user: Option<UserId>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use travel_tracker::domain::{TravelService, UserId};
    /// use travel_tracker::inbound::http::state::HttpState;
    /// use travel_tracker::outbound::memory::MemoryStore;
    ///
    /// let store = Arc::new(MemoryStore::seeded());
    /// let service = Arc::new(TravelService::new(store.clone(), store.clone(), store));
    /// let state = HttpState::new(service.clone(), service, UserId::new(1).ok());
    /// assert!(state.default_user.is_some());
    /// ```
    #[must_use]
    pub const fn new(
        home: Arc<dyn HomeQuery>,
        commands: Arc<dyn TravelCommand>,
        default_user: Option<UserId>,
    ) -> Self {
        Self {
            home,
            commands,
            default_user,
        }
    }
}
