//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe how the domain expects to reach its
//! stores; each exposes a strongly typed error so adapters map their failures
//! into predictable variants. Driving ports (`HomeQuery`, `TravelCommand`) are
//! what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod country_repository;
mod home_query;
mod travel_command;
mod user_repository;
mod visited_country_repository;

#[cfg(test)]
pub use country_repository::MockCountryRepository;
pub use country_repository::{CountryLookupError, CountryRepository};
pub use home_query::HomeQuery;
#[cfg(test)]
pub use home_query::MockHomeQuery;
#[cfg(test)]
pub use travel_command::MockTravelCommand;
pub use travel_command::TravelCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use visited_country_repository::MockVisitedCountryRepository;
pub use visited_country_repository::{
    VisitPersistenceError, VisitRecorded, VisitedCountryRepository,
};
