//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the driven ports backed by PostgreSQL via
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: driver failures become port error variants.
//!
//! # Example
//!
//! ```ignore
//! use travel_tracker::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/world")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_country_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod diesel_visited_country_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_country_repository::DieselCountryRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_visited_country_repository::DieselVisitedCountryRepository;
pub use migrations::{MigrationError, apply_pending_migrations, run_pending_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
