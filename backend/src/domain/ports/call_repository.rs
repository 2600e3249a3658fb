//! Port for call persistence.
//!
//! Every method takes the caller's [`AccountId`]; adapters must filter by it
//! before matching any other key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::{Page, PageRequest};

use crate::domain::{AccountId, Call, CallDraft, CallId, ContactId, ContactSummary};

use super::define_port_error;

define_port_error! {
    /// Errors raised by call repository adapters.
    pub enum CallRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "call repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "call repository query failed: {message}",
        /// The database rejected a write because of a constraint.
        Constraint { message: String } =>
            "call repository constraint violated: {message}",
    }
}

/// Port for reading and writing calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallRepository: Send + Sync {
    /// Page through the account's calls, newest first.
    async fn list_for_account(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError>;

    /// Page through the account's calls with one contact, newest first.
    async fn list_for_contact(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError>;

    /// Find a call by id within the account.
    async fn find(&self, account: AccountId, id: CallId)
    -> Result<Option<Call>, CallRepositoryError>;

    /// Insert a call stamped with `account`, created at `at`.
    ///
    /// `contact` has already been resolved within the same account.
    async fn insert(
        &self,
        account: AccountId,
        contact: &ContactSummary,
        draft: &CallDraft,
        at: DateTime<Utc>,
    ) -> Result<Call, CallRepositoryError>;

    /// Overwrite every caller-controlled field of a call and set
    /// `updated_at` to `at`.
    ///
    /// Returns `None` when no call with `id` exists within the account.
    async fn update(
        &self,
        account: AccountId,
        id: CallId,
        contact: &ContactSummary,
        draft: &CallDraft,
        at: DateTime<Utc>,
    ) -> Result<Option<Call>, CallRepositoryError>;

    /// Delete a call; returns whether a row was removed.
    async fn delete(&self, account: AccountId, id: CallId) -> Result<bool, CallRepositoryError>;
}
