//! Test utilities for the backend crate.
//!
//! [`InMemoryStore`] implements every repository port over plain vectors so
//! unit tests (in `src/`) and integration tests (in `tests/`) can drive the
//! real domain services without PostgreSQL. Ordering and account scoping
//! match the Diesel adapters.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use pagination::{Page, PageRequest};

use crate::domain::ports::{
    CallRepository, CallRepositoryError, ContactRepository, ContactRepositoryError,
    FixtureLoginService, GiftRepository, GiftRepositoryError,
};
use crate::domain::{
    AccountId, Call, CallDraft, CallId, CallService, ContactId, ContactSummary, Gift, GiftId,
    GiftService,
};
use crate::inbound::http::state::HttpStatePorts;

#[derive(Default)]
struct StoreState {
    contacts: Vec<ContactSummary>,
    calls: Vec<Call>,
    gifts: Vec<Gift>,
    last_call_id: i64,
}

/// Shared in-memory backing for the call, contact, and gift repositories.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

/// Contact with only a first name set.
///
/// ```
/// use crm_backend::domain::{AccountId, ContactId};
/// use crm_backend::test_support::contact;
///
/// let ada = contact(ContactId::new(1), AccountId::new(1), "Ada");
/// assert!(ada.belongs_to(AccountId::new(1)));
/// ```
#[must_use]
pub fn contact(id: ContactId, account_id: AccountId, first_name: &str) -> ContactSummary {
    ContactSummary {
        id,
        account_id,
        first_name: first_name.to_owned(),
        last_name: None,
        nickname: None,
        gender: None,
        is_partial: false,
        is_dead: false,
    }
}

fn paginate<T: Clone>(mut rows: Vec<T>, request: PageRequest) -> Page<T> {
    let total = rows.len() as u64;
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let items = if offset >= rows.len() {
        Vec::new()
    } else {
        rows.drain(offset..)
            .take(request.per_page() as usize)
            .collect()
    };
    Page::new(items, total, request)
}

fn newest_calls_first(rows: &mut [Call]) {
    rows.sort_by(|a, b| b.called_at.cmp(&a.called_at).then(b.id.cmp(&a.id)));
}

fn newest_gifts_first(rows: &mut [Gift]) {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

impl InMemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace a contact.
    pub fn seed_contact(&self, contact: ContactSummary) {
        let mut state = self.lock();
        state.contacts.retain(|existing| existing.id != contact.id);
        state.contacts.push(contact);
    }

    /// Insert a gift as stored.
    pub fn seed_gift(&self, gift: Gift) {
        self.lock().gifts.push(gift);
    }

    /// Insert a call as stored; later inserts receive higher ids.
    pub fn seed_call(&self, call: Call) {
        let mut state = self.lock();
        state.last_call_id = state.last_call_id.max(call.id.get());
        state.calls.push(call);
    }

    /// Number of calls currently stored, across every account.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Driving ports for the HTTP adapter, backed by this store.
    ///
    /// Login uses [`FixtureLoginService`].
    pub fn http_ports(self: &Arc<Self>, clock: Arc<dyn Clock>) -> HttpStatePorts {
        let calls = Arc::new(CallService::new(self.clone(), self.clone(), clock));
        HttpStatePorts {
            login: Arc::new(FixtureLoginService),
            calls: calls.clone(),
            calls_query: calls,
            gifts: Arc::new(GiftService::new(self.clone(), self.clone())),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn find_summary(
        &self,
        account: AccountId,
        id: ContactId,
    ) -> Result<Option<ContactSummary>, ContactRepositoryError> {
        Ok(self
            .lock()
            .contacts
            .iter()
            .find(|contact| contact.account_id == account && contact.id == id)
            .cloned())
    }
}

#[async_trait]
impl CallRepository for InMemoryStore {
    async fn list_for_account(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError> {
        let mut rows: Vec<Call> = self
            .lock()
            .calls
            .iter()
            .filter(|call| call.account_id == account)
            .cloned()
            .collect();
        newest_calls_first(&mut rows);
        Ok(paginate(rows, request))
    }

    async fn list_for_contact(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError> {
        let mut rows: Vec<Call> = self
            .lock()
            .calls
            .iter()
            .filter(|call| call.account_id == account && call.contact.id == contact)
            .cloned()
            .collect();
        newest_calls_first(&mut rows);
        Ok(paginate(rows, request))
    }

    async fn find(
        &self,
        account: AccountId,
        id: CallId,
    ) -> Result<Option<Call>, CallRepositoryError> {
        Ok(self
            .lock()
            .calls
            .iter()
            .find(|call| call.account_id == account && call.id == id)
            .cloned())
    }

    async fn insert(
        &self,
        account: AccountId,
        contact: &ContactSummary,
        draft: &CallDraft,
        at: DateTime<Utc>,
    ) -> Result<Call, CallRepositoryError> {
        let mut state = self.lock();
        state.last_call_id += 1;
        let call = Call {
            id: CallId::new(state.last_call_id),
            account_id: account,
            contact: contact.clone(),
            content: draft.content.as_str().to_owned(),
            called_at: draft.called_at,
            created_at: at,
            updated_at: None,
        };
        state.calls.push(call.clone());
        Ok(call)
    }

    async fn update(
        &self,
        account: AccountId,
        id: CallId,
        contact: &ContactSummary,
        draft: &CallDraft,
        at: DateTime<Utc>,
    ) -> Result<Option<Call>, CallRepositoryError> {
        let mut state = self.lock();
        let Some(call) = state
            .calls
            .iter_mut()
            .find(|call| call.account_id == account && call.id == id)
        else {
            return Ok(None);
        };
        call.contact = contact.clone();
        call.content = draft.content.as_str().to_owned();
        call.called_at = draft.called_at;
        call.updated_at = Some(at);
        Ok(Some(call.clone()))
    }

    async fn delete(&self, account: AccountId, id: CallId) -> Result<bool, CallRepositoryError> {
        let mut state = self.lock();
        let before = state.calls.len();
        state
            .calls
            .retain(|call| !(call.account_id == account && call.id == id));
        Ok(state.calls.len() < before)
    }
}

#[async_trait]
impl GiftRepository for InMemoryStore {
    async fn list_for_account(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError> {
        let mut rows: Vec<Gift> = self
            .lock()
            .gifts
            .iter()
            .filter(|gift| gift.account_id == account)
            .cloned()
            .collect();
        newest_gifts_first(&mut rows);
        Ok(paginate(rows, request))
    }

    async fn list_for_contact(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError> {
        let mut rows: Vec<Gift> = self
            .lock()
            .gifts
            .iter()
            .filter(|gift| gift.account_id == account && gift.contact.id == contact)
            .cloned()
            .collect();
        newest_gifts_first(&mut rows);
        Ok(paginate(rows, request))
    }

    async fn find(
        &self,
        account: AccountId,
        id: GiftId,
    ) -> Result<Option<Gift>, GiftRepositoryError> {
        Ok(self
            .lock()
            .gifts
            .iter()
            .find(|gift| gift.account_id == account && gift.id == id)
            .cloned())
    }
}
