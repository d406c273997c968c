//! Builders for the HTTP state from the configured storage.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use travel_tracker::domain::TravelService;
use travel_tracker::domain::UserId;
use travel_tracker::domain::ports::{HomeQuery, TravelCommand};
use travel_tracker::inbound::http::state::HttpState;
use travel_tracker::outbound::memory::MemoryStore;
use travel_tracker::outbound::persistence::{
    DbPool, DieselCountryRepository, DieselUserRepository, DieselVisitedCountryRepository,
};

use super::ServerConfig;

fn state_from_service<S>(service: S, default_user: Option<UserId>) -> HttpState
where
    S: HomeQuery + TravelCommand + 'static,
{
    let shared = Arc::new(service);
    HttpState::new(shared.clone(), shared, default_user)
}

fn diesel_state(pool: &DbPool, default_user: Option<UserId>) -> HttpState {
    state_from_service(
        TravelService::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselCountryRepository::new(pool.clone())),
            Arc::new(DieselVisitedCountryRepository::new(pool.clone())),
        ),
        default_user,
    )
}

fn memory_state(default_user: Option<UserId>) -> HttpState {
    warn!("no database configured; data lives in memory and is lost on restart");
    let store = Arc::new(MemoryStore::seeded());
    state_from_service(
        TravelService::new(store.clone(), store.clone(), store),
        default_user,
    )
}

/// Build the shared HTTP state, using PostgreSQL when a pool is configured
/// and the seeded in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = config.db_pool.as_ref().map_or_else(
        || memory_state(config.default_user),
        |pool| diesel_state(pool, config.default_user),
    );
    web::Data::new(state)
}
