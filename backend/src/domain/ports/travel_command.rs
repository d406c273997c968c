//! Driving port for mutations triggered by the page forms.
//!
//! Every error returned here carries one of the fixed visitor-facing
//! messages, so adapters can display [`Error::message`] directly.

use async_trait::async_trait;

use crate::domain::{CountryCode, Error, UserId};

/// Domain use-case port for visit and member mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelCommand: Send + Sync {
    /// Resolve `country` by name and record it for the current member.
    ///
    /// Returns the code that was stored.
    async fn add_visit(&self, current: Option<UserId>, country: &str)
    -> Result<CountryCode, Error>;

    /// Create a member from form input and return the new id.
    async fn create_user(&self, name: &str, color: &str) -> Result<UserId, Error>;

    /// Remove the current member and all of their visits.
    async fn delete_user(&self, current: Option<UserId>) -> Result<(), Error>;
}
