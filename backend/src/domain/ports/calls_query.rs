//! Driving port for call reads.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{AccountId, Call, CallId, ContactId, Error};

/// Use-case port for reading calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallsQuery: Send + Sync {
    /// Page through the account's calls.
    async fn list_calls(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Call>, Error>;

    /// Fetch one call of the account.
    async fn get_call(&self, account: AccountId, id: CallId) -> Result<Call, Error>;

    /// Page through the calls with one contact of the account.
    ///
    /// Fails with not-found when the contact is not in the account, even if
    /// it exists elsewhere.
    async fn list_contact_calls(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Call>, Error>;
}
