//! Household travel tracker: record which countries each member has visited.
//!
//! Layout follows ports and adapters. [`domain`] holds the types and the
//! service, [`inbound`] serves the HTML pages and [`outbound`] stores data in
//! PostgreSQL or in memory.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
