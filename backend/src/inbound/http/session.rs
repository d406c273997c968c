//! Per-client selection of the current member.
//!
//! The selection lives in the encrypted session cookie under
//! `current_user` with three possible states:
//!
//! - key absent: the client never chose, so the configured default applies;
//! - `null`: the client explicitly cleared the selection;
//! - an integer: the selected member id.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const CURRENT_USER_KEY: &str = "current_user";

/// Newtype wrapper that exposes the current-member operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Resolve the current member, falling back to `default` when the client
    /// never made a choice.
    ///
    /// A cookie that cannot be decoded counts as "never chosen".
    #[must_use]
    pub fn current_user(&self, default: Option<UserId>) -> Option<UserId> {
        match self.0.get::<Option<UserId>>(CURRENT_USER_KEY) {
            Ok(Some(selection)) => selection,
            Ok(None) => default,
            Err(error) => {
                warn!(%error, "unreadable member selection in session cookie");
                default
            }
        }
    }

    /// Store the current member. `None` records an explicit "no member".
    pub fn select_user(&self, user: Option<UserId>) -> Result<(), Error> {
        self.0
            .insert(CURRENT_USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
