//! Port for resolving contacts referenced by calls and gifts.

use async_trait::async_trait;

use crate::domain::{AccountId, ContactId, ContactSummary};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

/// Port for contact lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a contact by id within the account.
    ///
    /// A contact owned by another account is reported as `None`.
    async fn find_summary(
        &self,
        account: AccountId,
        id: ContactId,
    ) -> Result<Option<ContactSummary>, ContactRepositoryError>;
}
