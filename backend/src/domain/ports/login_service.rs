//! Driving port for authenticating credentials.
//!
//! Identity lives outside this service; handlers only need the resulting
//! user and account pair, so tests substitute doubles freely.

use async_trait::async_trait;

use crate::domain::{AccountId, AuthenticatedUser, Error, LoginCredentials, UserId};

/// Use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the caller's identity.
    async fn authenticate(&self, credentials: &LoginCredentials)
    -> Result<AuthenticatedUser, Error>;
}

/// Development authenticator: `admin` / `password` signs in as user 1 of
/// account 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

/// Identity returned by [`FixtureLoginService`].
pub const FIXTURE_USER: AuthenticatedUser =
    AuthenticatedUser::new(UserId::new(1), AccountId::new(1));

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, Error> {
        if credentials.username() == "admin" && credentials.password() == "password" {
            Ok(FIXTURE_USER)
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
