//! Driving port for the home page read model.
//!
//! Inbound adapters use this port to fetch everything the page shows without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, HomeView, UserId};

/// Domain use-case port for assembling the home page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HomeQuery: Send + Sync {
    /// Load the page for the given current member (if any).
    async fn home(&self, current: Option<UserId>) -> Result<HomeView, Error>;
}
