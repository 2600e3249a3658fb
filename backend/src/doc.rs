//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every calls, gifts, session, and health endpoint
//! - **Schemas**: presenter resources plus wrappers ([`ErrorSchema`],
//!   [`ErrorCodeSchema`], the page envelopes) that describe domain types
//!   without coupling them to utoipa
//! - **Security**: Session cookie authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::resources::{
    AccountRef, CallResource, ContactShortResource, DeletedResource, GiftResource,
};
use crate::inbound::http::schemas::{
    CallPageSchema, CallRequestSchema, ErrorCodeSchema, ErrorSchema, GiftPageSchema,
    PageLinksSchema, PageMetaSchema,
};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "CRM calls and gifts API",
        description = "Account-scoped access to logged calls and recorded gifts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::calls::list_calls,
        crate::inbound::http::calls::get_call,
        crate::inbound::http::calls::create_call,
        crate::inbound::http::calls::update_call,
        crate::inbound::http::calls::delete_call,
        crate::inbound::http::calls::list_contact_calls,
        crate::inbound::http::gifts::list_gifts,
        crate::inbound::http::gifts::get_gift,
        crate::inbound::http::gifts::list_contact_gifts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        AccountRef,
        ContactShortResource,
        CallResource,
        GiftResource,
        DeletedResource,
        CallRequestSchema,
        PageLinksSchema,
        PageMetaSchema,
        CallPageSchema,
        GiftPageSchema,
        LoginRequest
    )),
    tags(
        (name = "calls", description = "Calls logged against contacts"),
        (name = "gifts", description = "Gifts recorded for contacts"),
        (name = "session", description = "Login and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
