//! Gift domain service implementing [`GiftsQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::call_service::resolve_contact;
use crate::domain::ports::{ContactRepository, GiftRepository, GiftRepositoryError, GiftsQuery};
use crate::domain::{AccountId, ContactId, Error, Gift, GiftId};

fn map_repository_error(error: GiftRepositoryError) -> Error {
    match error {
        GiftRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("gift repository unavailable: {message}"))
        }
        GiftRepositoryError::Query { message } => {
            Error::internal(format!("gift repository error: {message}"))
        }
    }
}

/// Read-side gift service.
#[derive(Clone)]
pub struct GiftService<G, K> {
    gifts: Arc<G>,
    contacts: Arc<K>,
}

impl<G, K> GiftService<G, K> {
    /// Create a service over the gift and contact repositories.
    pub fn new(gifts: Arc<G>, contacts: Arc<K>) -> Self {
        Self { gifts, contacts }
    }
}

#[async_trait]
impl<G, K> GiftsQuery for GiftService<G, K>
where
    G: GiftRepository,
    K: ContactRepository,
{
    async fn list_gifts(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Gift>, Error> {
        self.gifts
            .list_for_account(account, request)
            .await
            .map_err(map_repository_error)
    }

    async fn get_gift(&self, account: AccountId, id: GiftId) -> Result<Gift, Error> {
        self.gifts
            .find(account, id)
            .await
            .map_err(map_repository_error)?
            .filter(|gift| gift.account_id == account)
            .ok_or_else(Error::resource_not_found)
    }

    async fn list_contact_gifts(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Gift>, Error> {
        let contact = resolve_contact(self.contacts.as_ref(), account, contact).await?;
        self.gifts
            .list_for_contact(account, contact.id, request)
            .await
            .map_err(map_repository_error)
    }
}
