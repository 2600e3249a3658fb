//! Domain entities, services, and ports.
//!
//! Everything here is transport agnostic: inbound adapters translate HTTP into
//! calls on the driving ports in [`ports`], and outbound adapters implement
//! the repository ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure with a stable numeric
//!   API code.
//! - `Call`, `CallDraft`, `CallContent`: logged calls and their validated input.
//! - `Gift`: gifts presented with their contact.
//! - `ContactSummary`: short contact form embedded in calls and gifts.
//! - `CallService`, `GiftService`: account-scoped implementations of the
//!   driving ports.

pub mod auth;
pub mod call;
pub mod call_service;
pub mod contact;
pub mod error;
pub mod gift;
pub mod gift_service;
pub mod ids;
pub mod ports;
pub mod trace_id;

pub use self::auth::{AuthenticatedUser, LoginCredentials, LoginValidationError};
pub use self::call::{
    CALL_CONTENT_MAX_CHARS, Call, CallContent, CallDraft, CallValidationError,
};
pub use self::call_service::CallService;
pub use self::contact::ContactSummary;
pub use self::error::{Error, ErrorCode, RESOURCE_NOT_FOUND_MESSAGE};
pub use self::gift::Gift;
pub use self::gift_service::GiftService;
pub use self::ids::{AccountId, CallId, ContactId, GiftId, UserId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Result alias used by HTTP handlers.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use crm_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::resource_not_found())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
