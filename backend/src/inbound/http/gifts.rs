//! Read-only gifts API handlers.
//!
//! ```text
//! GET /api/v1/gifts
//! GET /api/v1/gifts/{id}
//! GET /api/v1/contacts/{id}/gifts
//! ```

use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::domain::{ApiResult, ContactId, GiftId};
use crate::inbound::http::listing::{ListQuery, render_page};
use crate::inbound::http::resources::{DataEnvelope, GiftResource};
use crate::inbound::http::schemas::{ErrorSchema, GiftPageSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List the account's gifts, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/gifts",
    params(
        ("page" = Option<i64>, Query, description = "One-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Gifts", body = GiftPageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["gifts"],
    operation_id = "listGifts",
    security(("SessionCookie" = []))
)]
#[get("/gifts")]
pub async fn list_gifts(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let user = session.require_current_user()?;
    let page_request = state.limits.page_request(query.into_inner())?;
    let page = state.gifts.list_gifts(user.account_id, page_request).await?;
    render_page(&request, page, |gift| {
        GiftResource::present(gift, &state.timestamps)
    })
}

/// Fetch one gift.
#[utoipa::path(
    get,
    path = "/api/v1/gifts/{id}",
    params(("id" = i64, Path, description = "Gift id")),
    responses(
        (status = 200, description = "Gift", body = DataEnvelope<GiftResource>),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["gifts"],
    operation_id = "getGift",
    security(("SessionCookie" = []))
)]
#[get("/gifts/{id}")]
pub async fn get_gift(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DataEnvelope<GiftResource>>> {
    let user = session.require_current_user()?;
    let gift = state
        .gifts
        .get_gift(user.account_id, GiftId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DataEnvelope::new(GiftResource::present(
        gift,
        &state.timestamps,
    ))))
}

/// List gifts for one contact.
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}/gifts",
    params(
        ("id" = i64, Path, description = "Contact id"),
        ("page" = Option<i64>, Query, description = "One-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Gifts for the contact", body = GiftPageSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema)
    ),
    tags = ["gifts"],
    operation_id = "listContactGifts",
    security(("SessionCookie" = []))
)]
#[get("/contacts/{id}/gifts")]
pub async fn list_contact_gifts(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let user = session.require_current_user()?;
    let page_request = state.limits.page_request(query.into_inner())?;
    let page = state
        .gifts
        .list_contact_gifts(
            user.account_id,
            ContactId::new(path.into_inner()),
            page_request,
        )
        .await?;
    render_page(&request, page, |gift| {
        GiftResource::present(gift, &state.timestamps)
    })
}

#[cfg(test)]
#[path = "gifts_tests.rs"]
mod tests;
