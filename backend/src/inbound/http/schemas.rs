//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`, and the
//! pagination crate knows nothing of utoipa. The wrappers here mirror their
//! wire shape so the OpenAPI document stays accurate.

use utoipa::ToSchema;

use crate::inbound::http::resources::{CallResource, GiftResource};

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// `limit` above the configured maximum (`error_code` 30).
    #[schema(rename = "limit_too_big")]
    LimitTooBig,
    /// Missing or foreign resource (`error_code` 31).
    #[schema(rename = "not_found")]
    NotFound,
    /// Field validation failed (`error_code` 32).
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// Unparsable JSON body (`error_code` 37).
    #[schema(rename = "malformed_json")]
    MalformedJson,
    /// Rejected parameters (`error_code` 41).
    #[schema(rename = "invalid_parameters")]
    InvalidParameters,
    /// Missing session (`error_code` 42).
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Database unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Numeric application error code; `null` for infrastructure failures.
    #[schema(example = 31)]
    error_code: Option<u16>,
    /// Human-readable message returned to clients.
    #[schema(example = "The resource has not been found")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details; validation failures carry `messages`.
    details: Option<serde_json::Value>,
}

/// Request body accepted by call create and update.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CallRequestSchema {
    /// Note text, at most 100000 characters.
    #[schema(example = "Talked about the trip")]
    content: String,
    /// When the call took place; RFC 3339 or `YYYY-MM-DD[ HH:MM:SS]`.
    #[schema(example = "2024-03-01 09:30:00")]
    called_at: String,
    /// Contact within the caller's account.
    #[schema(example = 12)]
    contact_id: i64,
}

/// OpenAPI schema for `pagination::PageLinks`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageLinksSchema {
    /// Link to page 1.
    first: String,
    /// Link to the last page.
    last: String,
    /// Previous page, `null` on page 1.
    prev: Option<String>,
    /// Next page, `null` on the last page.
    next: Option<String>,
}

/// OpenAPI schema for `pagination::PageMeta`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageMetaSchema {
    /// Current page.
    current_page: u32,
    /// Position of the first item, `null` when empty.
    from: Option<u64>,
    /// Number of the last page.
    last_page: u64,
    /// Collection URL.
    path: String,
    /// Page size.
    per_page: u32,
    /// Position of the last item, `null` when empty.
    to: Option<u64>,
    /// Collection size.
    total: u64,
}

/// Paginated calls document.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CallPageSchema {
    /// Calls on this page.
    data: Vec<CallResource>,
    /// Navigation links.
    links: PageLinksSchema,
    /// Paging counters.
    meta: PageMetaSchema,
}

/// Paginated gifts document.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GiftPageSchema {
    /// Gifts on this page.
    data: Vec<GiftResource>,
    /// Navigation links.
    links: PageLinksSchema,
    /// Paging counters.
    meta: PageMetaSchema,
}
