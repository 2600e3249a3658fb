//! Live server harness and shared world for the CRM behaviour suites.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` ensures the server
//! is stopped even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use chrono::{DateTime, TimeZone, Utc};
use crm_backend::Trace;
use crm_backend::domain::{AccountId, ContactId, Gift, GiftId};
use crm_backend::inbound::http::configure_api;
use crm_backend::inbound::http::state::HttpState;
use crm_backend::test_support::{InMemoryStore, contact};
use mockable::DefaultClock;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

/// Account the fixture login resolves to.
pub(crate) const OWN_ACCOUNT: AccountId = AccountId::new(1);
/// Contact owned by [`OWN_ACCOUNT`].
pub(crate) const OWN_CONTACT: ContactId = ContactId::new(12);
/// Contact owned by a different account.
pub(crate) const FOREIGN_CONTACT: ContactId = ContactId::new(77);
/// Gift owned by [`OWN_ACCOUNT`] that was never edited.
pub(crate) const OWN_GIFT: GiftId = GiftId::new(5);

pub(crate) struct CrmWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) store: Arc<InMemoryStore>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) session_cookie: Option<String>,
    pub(crate) logged_call_id: Option<i64>,
}

pub(crate) type SharedWorld = Rc<RefCell<CrmWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

pub(crate) fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we lock the world
    // while calling `block_on`. The future must not try to lock the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn test_session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::hours(2)))
        .build()
}

async fn spawn_crm_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .wrap(test_session_middleware(key.clone()))
            .configure(configure_api);

        App::new()
            .app_data(http_data.clone())
            .wrap(Trace)
            .service(api)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, day, 10, 0, 0)
        .single()
        .expect("valid date")
}

/// Store holding one contact per account and a never-edited gift.
fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    let ada = contact(OWN_CONTACT, OWN_ACCOUNT, "Ada");
    store.seed_contact(ada.clone());
    store.seed_contact(contact(FOREIGN_CONTACT, AccountId::new(2), "Grace"));
    store.seed_gift(Gift {
        id: OWN_GIFT,
        account_id: OWN_ACCOUNT,
        contact: ada,
        body: "Slide rule".to_owned(),
        created_at: at(2),
        updated_at: None,
    });
    store
}

pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let store = seeded_store();
    let http_state = HttpState::new(store.http_ports(Arc::new(DefaultClock)));

    let (base_url, server) = local
        .block_on(&runtime, spawn_crm_server(http_state))
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(CrmWorld {
            runtime,
            local,
            base_url,
            server,
            store,
            last_status: None,
            last_body: None,
            session_cookie: None,
            logged_call_id: None,
        })),
    }
}
