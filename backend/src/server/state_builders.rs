//! Builders wiring repositories and domain services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use crm_backend::domain::ports::{
    CallRepository, ContactRepository, FixtureLoginService, GiftRepository,
};
use crm_backend::domain::{CallService, GiftService};
use crm_backend::inbound::http::state::{HttpState, HttpStatePorts};
use crm_backend::outbound::persistence::{
    DieselCallRepository, DieselContactRepository, DieselGiftRepository,
};

use super::ServerConfig;

/// Compose the driving ports over any repository implementations.
///
/// One [`CallService`] backs both the command and query ports; the contact
/// repository is shared by the call and gift services.
fn build_ports<C, K, G>(
    calls: Arc<C>,
    contacts: Arc<K>,
    gifts: Arc<G>,
    clock: Arc<dyn Clock>,
) -> HttpStatePorts
where
    C: CallRepository + 'static,
    K: ContactRepository + 'static,
    G: GiftRepository + 'static,
{
    let call_service = Arc::new(CallService::new(calls, contacts.clone(), clock));
    HttpStatePorts {
        login: Arc::new(FixtureLoginService),
        calls: call_service.clone(),
        calls_query: call_service,
        gifts: Arc::new(GiftService::new(gifts, contacts)),
    }
}

/// Build the shared HTTP state from the configured pool.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let pool = &config.db_pool;
    let ports = build_ports(
        Arc::new(DieselCallRepository::new(pool.clone())),
        Arc::new(DieselContactRepository::new(pool.clone())),
        Arc::new(DieselGiftRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    );
    web::Data::new(
        HttpState::new(ports)
            .with_limits(config.limits)
            .with_timestamps(config.timestamps.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crm_backend::domain::{AccountId, CallContent, CallDraft, ContactId, ErrorCode};
    use crm_backend::test_support::{InMemoryStore, contact};
    use pagination::PageRequest;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.seed_contact(contact(ContactId::new(3), AccountId::new(1), "Grace"));
        store
    }

    fn draft(contact_id: ContactId) -> CallDraft {
        CallDraft {
            content: CallContent::new("Caught up").expect("content"),
            called_at: Utc
                .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
                .single()
                .expect("valid date"),
            contact_id,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn command_and_query_share_one_call_service(store: Arc<InMemoryStore>) {
        let ports = build_ports(store.clone(), store.clone(), store, Arc::new(DefaultClock));

        let created = ports
            .calls
            .create_call(AccountId::new(1), draft(ContactId::new(3)))
            .await
            .expect("create");
        let fetched = ports
            .calls_query
            .get_call(AccountId::new(1), created.id)
            .await
            .expect("get");

        assert_eq!(fetched, created);
    }

    #[rstest]
    #[tokio::test]
    async fn gifts_resolve_contacts_through_the_shared_repository(store: Arc<InMemoryStore>) {
        let ports = build_ports(store.clone(), store.clone(), store, Arc::new(DefaultClock));
        let request = PageRequest::new(1, 10).expect("page request");

        let err = ports
            .gifts
            .list_contact_gifts(AccountId::new(2), ContactId::new(3), request)
            .await
            .expect_err("contact belongs to another account");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
