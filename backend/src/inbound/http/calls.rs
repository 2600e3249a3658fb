//! Calls API handlers.
//!
//! ```text
//! GET    /api/v1/calls
//! GET    /api/v1/calls/{id}
//! POST   /api/v1/calls {"content":"...","called_at":"2024-03-01","contact_id":12}
//! PUT    /api/v1/calls/{id}
//! DELETE /api/v1/calls/{id}
//! GET    /api/v1/contacts/{id}/calls
//! ```
//!
//! Every handler acts within the session's account; records of other
//! accounts are reported exactly like missing ones.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde_json::{Map, Value};

use crate::domain::{ApiResult, CallId, ContactId};
use crate::inbound::http::listing::{ListQuery, render_page};
use crate::inbound::http::resources::{CallResource, DataEnvelope, DeletedResource};
use crate::inbound::http::schemas::{CallPageSchema, CallRequestSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_call_payload;

/// List the account's calls, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/calls",
    params(
        ("page" = Option<i64>, Query, description = "One-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Calls", body = CallPageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["calls"],
    operation_id = "listCalls",
    security(("SessionCookie" = []))
)]
#[get("/calls")]
pub async fn list_calls(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let user = session.require_current_user()?;
    let page_request = state.limits.page_request(query.into_inner())?;
    let page = state
        .calls_query
        .list_calls(user.account_id, page_request)
        .await?;
    render_page(&request, page, |call| {
        CallResource::present(call, &state.timestamps)
    })
}

/// Fetch one call.
#[utoipa::path(
    get,
    path = "/api/v1/calls/{id}",
    params(("id" = i64, Path, description = "Call id")),
    responses(
        (status = 200, description = "Call", body = DataEnvelope<CallResource>),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["calls"],
    operation_id = "getCall",
    security(("SessionCookie" = []))
)]
#[get("/calls/{id}")]
pub async fn get_call(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DataEnvelope<CallResource>>> {
    let user = session.require_current_user()?;
    let call = state
        .calls_query
        .get_call(user.account_id, CallId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DataEnvelope::new(CallResource::present(
        call,
        &state.timestamps,
    ))))
}

/// Record a call with one of the account's contacts.
#[utoipa::path(
    post,
    path = "/api/v1/calls",
    request_body = CallRequestSchema,
    responses(
        (status = 201, description = "Call created", body = DataEnvelope<CallResource>),
        (status = 400, description = "Validation failed or malformed body", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema)
    ),
    tags = ["calls"],
    operation_id = "createCall",
    security(("SessionCookie" = []))
)]
#[post("/calls")]
pub async fn create_call(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<HttpResponse> {
    let user = session.require_current_user()?;
    let draft = parse_call_payload(&payload)?;
    let call = state.calls.create_call(user.account_id, draft).await?;
    Ok(HttpResponse::Created().json(DataEnvelope::new(CallResource::present(
        call,
        &state.timestamps,
    ))))
}

/// Replace every field of a call.
///
/// The call is located before the body is validated, so an unknown id is a
/// 404 whatever the payload.
#[utoipa::path(
    put,
    path = "/api/v1/calls/{id}",
    params(("id" = i64, Path, description = "Call id")),
    request_body = CallRequestSchema,
    responses(
        (status = 200, description = "Call updated", body = DataEnvelope<CallResource>),
        (status = 400, description = "Validation failed or malformed body", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Call or contact not found", body = ErrorSchema)
    ),
    tags = ["calls"],
    operation_id = "updateCall",
    security(("SessionCookie" = []))
)]
#[put("/calls/{id}")]
pub async fn update_call(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<DataEnvelope<CallResource>>> {
    let user = session.require_current_user()?;
    let id = CallId::new(path.into_inner());
    state.calls_query.get_call(user.account_id, id).await?;
    let draft = parse_call_payload(&payload)?;
    let call = state.calls.update_call(user.account_id, id, draft).await?;
    Ok(web::Json(DataEnvelope::new(CallResource::present(
        call,
        &state.timestamps,
    ))))
}

/// Delete a call.
#[utoipa::path(
    delete,
    path = "/api/v1/calls/{id}",
    params(("id" = i64, Path, description = "Call id")),
    responses(
        (status = 200, description = "Call deleted", body = DeletedResource),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["calls"],
    operation_id = "deleteCall",
    security(("SessionCookie" = []))
)]
#[delete("/calls/{id}")]
pub async fn delete_call(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeletedResource>> {
    let user = session.require_current_user()?;
    let id = state
        .calls
        .delete_call(user.account_id, CallId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DeletedResource::new(id.get())))
}

/// List calls with one contact.
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}/calls",
    params(
        ("id" = i64, Path, description = "Contact id"),
        ("page" = Option<i64>, Query, description = "One-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Calls with the contact", body = CallPageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema)
    ),
    tags = ["calls"],
    operation_id = "listContactCalls",
    security(("SessionCookie" = []))
)]
#[get("/contacts/{id}/calls")]
pub async fn list_contact_calls(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let user = session.require_current_user()?;
    let page_request = state.limits.page_request(query.into_inner())?;
    let page = state
        .calls_query
        .list_contact_calls(
            user.account_id,
            ContactId::new(path.into_inner()),
            page_request,
        )
        .await?;
    render_page(&request, page, |call| {
        CallResource::present(call, &state.timestamps)
    })
}

#[cfg(test)]
#[path = "calls_tests.rs"]
mod tests;
