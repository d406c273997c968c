//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use travel_tracker::domain::UserId;
use travel_tracker::inbound::http::session_config::SessionSettings;
use travel_tracker::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: (String, u16),
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) default_user: Option<UserId>,
}

impl ServerConfig {
    /// Construct a configuration from validated session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: (String, u16)) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            default_user: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server runs on the seeded in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Member selected for clients that never chose one.
    #[must_use]
    pub fn with_default_user(mut self, default_user: Option<UserId>) -> Self {
        self.default_user = default_user;
        self
    }
}
