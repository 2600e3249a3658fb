//! Driving port for gift reads.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{AccountId, ContactId, Error, Gift, GiftId};

/// Use-case port for reading gifts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GiftsQuery: Send + Sync {
    /// Page through the account's gifts.
    async fn list_gifts(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Gift>, Error>;

    /// Fetch one gift of the account.
    async fn get_gift(&self, account: AccountId, id: GiftId) -> Result<Gift, Error>;

    /// Page through the gifts for one contact of the account.
    async fn list_contact_gifts(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Gift>, Error>;
}
