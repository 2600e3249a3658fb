//! Port for gift reads.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{AccountId, ContactId, Gift, GiftId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by gift repository adapters.
    pub enum GiftRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "gift repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "gift repository query failed: {message}",
    }
}

/// Port for reading gifts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GiftRepository: Send + Sync {
    /// Page through the account's gifts, newest first.
    async fn list_for_account(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError>;

    /// Page through the account's gifts for one contact, newest first.
    async fn list_for_contact(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError>;

    /// Find a gift by id within the account.
    async fn find(&self, account: AccountId, id: GiftId)
    -> Result<Option<Gift>, GiftRepositoryError>;
}
