//! Driving port for call mutations.

use async_trait::async_trait;

use crate::domain::{AccountId, Call, CallDraft, CallId, Error};

/// Use-case port for creating, replacing, and deleting calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallsCommand: Send + Sync {
    /// Record a call with a contact of the account.
    async fn create_call(&self, account: AccountId, draft: CallDraft) -> Result<Call, Error>;

    /// Replace every caller-controlled field of an existing call.
    async fn update_call(
        &self,
        account: AccountId,
        id: CallId,
        draft: CallDraft,
    ) -> Result<Call, Error>;

    /// Delete a call and return its id.
    async fn delete_call(&self, account: AccountId, id: CallId) -> Result<CallId, Error>;
}
