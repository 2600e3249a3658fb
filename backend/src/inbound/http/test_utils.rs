//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::json;

use crate::domain::ports::{FixtureLoginService, MockCallsCommand, MockCallsQuery, MockGiftsQuery};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Name of the session cookie issued by [`test_session_middleware`].
pub const SESSION_COOKIE: &str = "session";

/// Session middleware with a throwaway key and the `Secure` flag disabled so
/// cookies survive plain HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Session cookie set on `res`; panics when the response carries none.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .expect("session cookie set")
        .into_owned()
}

/// Ports backed by mocks without expectations; any call panics.
///
/// Override the ports a test exercises with struct update syntax.
pub fn unused_ports() -> HttpStatePorts {
    HttpStatePorts {
        login: Arc::new(FixtureLoginService),
        calls: Arc::new(MockCallsCommand::new()),
        calls_query: Arc::new(MockCallsQuery::new()),
        gifts: Arc::new(MockGiftsQuery::new()),
    }
}

/// App with the test session middleware and the full `/api/v1` surface.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .wrap(test_session_middleware())
            .configure(configure_api),
    )
}

/// Log in as [`crate::domain::ports::FIXTURE_USER`] and return the session cookie.
pub async fn login_cookie<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "admin", "password": "password" }))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "fixture login failed");
    session_cookie(&res)
}
