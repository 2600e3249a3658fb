//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! the authenticated identity: who is calling and which account they act in.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AccountId, AuthenticatedUser, Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const ACCOUNT_ID_KEY: &str = "account_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated identity in the session cookie.
    pub fn persist_user(&self, user: &AuthenticatedUser) -> Result<(), Error> {
        let persist = |key: &str, value: i64| {
            self.0
                .insert(key, value)
                .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
        };
        self.0.renew();
        persist(USER_ID_KEY, user.user_id.get())?;
        persist(ACCOUNT_ID_KEY, user.account_id.get())
    }

    /// Identity stored in the session, if present and well formed.
    ///
    /// A cookie that decrypts but carries unexpected values is treated as
    /// anonymous.
    pub fn current_user(&self) -> Option<AuthenticatedUser> {
        let user_id = self.read_id(USER_ID_KEY)?;
        let account_id = self.read_id(ACCOUNT_ID_KEY)?;
        Some(AuthenticatedUser::new(
            UserId::new(user_id),
            AccountId::new(account_id),
        ))
    }

    /// Require an authenticated identity or return `401 Unauthorized`.
    pub fn require_current_user(&self) -> Result<AuthenticatedUser, Error> {
        self.current_user()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Forget the stored identity.
    pub fn purge(&self) {
        self.0.purge();
    }

    fn read_id(&self, key: &str) -> Option<i64> {
        match self.0.get::<i64>(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "invalid identifier in session cookie");
                None
            }
        }
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
