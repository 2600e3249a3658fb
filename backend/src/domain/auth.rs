//! Authentication primitives: login credentials and the request-scoped
//! identity every account-scoped operation runs under.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::{AccountId, UserId};

/// Rejection reasons for raw login input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; surrounding whitespace is kept verbatim.
///
/// # Examples
/// ```
/// use crm_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin ", "password").expect("valid");
/// assert_eq!(creds.username(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw username and password input.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Caller-supplied password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Identity of the caller for the current request.
///
/// Replaces any ambient "current user" lookup: handlers obtain it from the
/// session and pass the account explicitly to every port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Authenticated user.
    pub user_id: UserId,
    /// Account the user acts within.
    pub account_id: AccountId,
}

impl AuthenticatedUser {
    /// Pair a user with the account they act within.
    #[must_use]
    pub const fn new(user_id: UserId, account_id: AccountId) -> Self {
        Self {
            user_id,
            account_id,
        }
    }
}
