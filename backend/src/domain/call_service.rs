//! Call domain service.
//!
//! Implements the call driving ports over the call and contact repositories.
//! Every lookup is scoped to the caller's account; a contact or call in
//! another account is indistinguishable from one that does not exist.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::{debug, info};

use crate::domain::ports::{
    CallRepository, CallRepositoryError, CallsCommand, CallsQuery, ContactRepository,
    ContactRepositoryError,
};
use crate::domain::{AccountId, Call, CallDraft, CallId, ContactId, ContactSummary, Error};

fn map_call_repository_error(error: CallRepositoryError) -> Error {
    match error {
        CallRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("call repository unavailable: {message}"))
        }
        CallRepositoryError::Query { message } => {
            Error::internal(format!("call repository error: {message}"))
        }
        CallRepositoryError::Constraint { message } => {
            debug!(%message, "call write rejected by constraint");
            Error::invalid_parameters("")
        }
    }
}

pub(crate) fn map_contact_repository_error(error: ContactRepositoryError) -> Error {
    match error {
        ContactRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("contact repository unavailable: {message}"))
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
    }
}

/// Resolve `id` within `account`, failing with not-found otherwise.
pub(crate) async fn resolve_contact<K>(
    contacts: &K,
    account: AccountId,
    id: ContactId,
) -> Result<ContactSummary, Error>
where
    K: ContactRepository + ?Sized,
{
    let contact = contacts
        .find_summary(account, id)
        .await
        .map_err(map_contact_repository_error)?
        .filter(|contact| contact.belongs_to(account));
    contact.ok_or_else(Error::resource_not_found)
}

/// Call service implementing [`CallsCommand`] and [`CallsQuery`].
///
/// The clock stamps `created_at` on insert and `updated_at` on replace.
#[derive(Clone)]
pub struct CallService<C, K> {
    calls: Arc<C>,
    contacts: Arc<K>,
    clock: Arc<dyn Clock>,
}

impl<C, K> CallService<C, K> {
    /// Create a service over the call and contact repositories.
    pub fn new(calls: Arc<C>, contacts: Arc<K>, clock: Arc<dyn Clock>) -> Self {
        Self {
            calls,
            contacts,
            clock,
        }
    }
}

impl<C, K> CallService<C, K>
where
    C: CallRepository,
    K: ContactRepository,
{
    async fn find_call(&self, account: AccountId, id: CallId) -> Result<Call, Error> {
        self.calls
            .find(account, id)
            .await
            .map_err(map_call_repository_error)?
            .filter(|call| call.account_id == account)
            .ok_or_else(Error::resource_not_found)
    }
}

#[async_trait]
impl<C, K> CallsCommand for CallService<C, K>
where
    C: CallRepository,
    K: ContactRepository,
{
    async fn create_call(&self, account: AccountId, draft: CallDraft) -> Result<Call, Error> {
        let contact = resolve_contact(self.contacts.as_ref(), account, draft.contact_id).await?;
        let call = self
            .calls
            .insert(account, &contact, &draft, self.clock.utc())
            .await
            .map_err(map_call_repository_error)?;
        info!(account_id = %account, call_id = %call.id, contact_id = %contact.id, "call created");
        Ok(call)
    }

    async fn update_call(
        &self,
        account: AccountId,
        id: CallId,
        draft: CallDraft,
    ) -> Result<Call, Error> {
        let contact = resolve_contact(self.contacts.as_ref(), account, draft.contact_id).await?;
        let call = self
            .calls
            .update(account, id, &contact, &draft, self.clock.utc())
            .await
            .map_err(map_call_repository_error)?
            .ok_or_else(Error::resource_not_found)?;
        info!(account_id = %account, call_id = %id, "call updated");
        Ok(call)
    }

    async fn delete_call(&self, account: AccountId, id: CallId) -> Result<CallId, Error> {
        let removed = self
            .calls
            .delete(account, id)
            .await
            .map_err(map_call_repository_error)?;
        if !removed {
            return Err(Error::resource_not_found());
        }
        info!(account_id = %account, call_id = %id, "call deleted");
        Ok(id)
    }
}

#[async_trait]
impl<C, K> CallsQuery for CallService<C, K>
where
    C: CallRepository,
    K: ContactRepository,
{
    async fn list_calls(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Call>, Error> {
        self.calls
            .list_for_account(account, request)
            .await
            .map_err(map_call_repository_error)
    }

    async fn get_call(&self, account: AccountId, id: CallId) -> Result<Call, Error> {
        self.find_call(account, id).await
    }

    async fn list_contact_calls(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Call>, Error> {
        let contact = resolve_contact(self.contacts.as_ref(), account, contact).await?;
        self.calls
            .list_for_contact(account, contact.id, request)
            .await
            .map_err(map_call_repository_error)
    }
}

#[cfg(test)]
#[path = "call_service_tests.rs"]
mod tests;
