//! Domain primitives and services.
//!
//! Purpose: Define strongly typed values for members, countries and visits,
//! and the service that turns page actions into repository calls. Keep types
//! immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — failure carrying a visitor-facing message.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, UserId, NewUser — household members.
//! - CountryCode, CountryQuery — visited regions and name searches.
//! - HomeView — everything the home page shows.
//! - TravelService — implements the driving ports.

pub mod country;
pub mod error;
pub mod home;
pub mod messages;
pub mod ports;
pub mod travel_service;
pub mod user;

pub use self::country::{CountryCode, CountryQuery, CountryValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::home::HomeView;
pub use self::travel_service::TravelService;
pub use self::user::{
    NewUser, USER_COLOR_MAX, USER_NAME_MAX, User, UserColor, UserId, UserName,
    UserValidationError,
};
