//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses with matching status codes; the numeric `error_code` carried in
//! every payload is part of the public API contract and must stay stable.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Message used whenever a resource is missing or belongs to another account.
pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "The resource has not been found";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `limit` query parameter exceeds the configured maximum.
    LimitTooBig,
    /// The requested resource does not exist within the caller's account.
    NotFound,
    /// One or more request fields failed validation.
    ValidationFailed,
    /// The request body is not valid JSON of the expected shape.
    MalformedJson,
    /// The request parameters were rejected, e.g. by a storage constraint.
    InvalidParameters,
    /// Authentication failed or is missing.
    Unauthorized,
    /// A dependency such as the database is temporarily unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

impl ErrorCode {
    /// Numeric application error code exposed to API clients.
    ///
    /// Infrastructure failures have no numeric code.
    #[must_use]
    pub const fn api_code(self) -> Option<u16> {
        match self {
            Self::LimitTooBig => Some(30),
            Self::NotFound => Some(31),
            Self::ValidationFailed => Some(32),
            Self::MalformedJson => Some(37),
            Self::InvalidParameters => Some(41),
            Self::Unauthorized => Some(42),
            Self::ServiceUnavailable | Self::InternalError => None,
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Self::LimitTooBig => "The limit parameter is too big",
            Self::NotFound => RESOURCE_NOT_FOUND_MESSAGE,
            Self::ValidationFailed => "The given data was invalid.",
            Self::MalformedJson => "Problems parsing JSON",
            Self::InvalidParameters => "Invalid parameters",
            Self::Unauthorized => "Not authorized",
            Self::ServiceUnavailable => "Service unavailable",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is never blank; blank input is replaced with the code's
///   default message.
///
/// # Examples
/// ```
/// use crm_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.code().api_code(), Some(31));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

impl Error {
    /// Create a new error, falling back to the code's default message when
    /// `message` is blank.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.default_message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: None,
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier attached to the error, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Validation messages carried by a [`ErrorCode::ValidationFailed`] error.
    pub fn validation_messages(&self) -> Vec<&str> {
        self.details
            .as_ref()
            .and_then(|details| details.get("messages"))
            .and_then(Value::as_array)
            .map(|messages| messages.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a correlation identifier to the error.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Error for a `limit` query parameter above `max`.
    pub fn limit_too_big(max: u32) -> Self {
        Self::new(ErrorCode::LimitTooBig, "").with_details(json!({ "max": max }))
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Not-found error with the standard client-facing message.
    ///
    /// Missing rows and rows owned by another account produce the same error
    /// so clients cannot probe for foreign identifiers.
    pub fn resource_not_found() -> Self {
        Self::not_found(RESOURCE_NOT_FOUND_MESSAGE)
    }

    /// Validation failure listing every offending field message.
    ///
    /// # Examples
    /// ```
    /// use crm_backend::domain::{Error, ErrorCode};
    ///
    /// let err = Error::validation_failed(vec!["The content field is required.".to_owned()]);
    /// assert_eq!(err.code().api_code(), Some(32));
    /// assert_eq!(err.validation_messages(), vec!["The content field is required."]);
    /// ```
    pub fn validation_failed(messages: Vec<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, "")
            .with_details(json!({ "messages": messages }))
    }

    /// Convenience constructor for [`ErrorCode::MalformedJson`].
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedJson, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidParameters`].
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameters, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of [`Error`]; `error_code` is derived from `code` on output.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorDto {
    code: ErrorCode,
    #[serde(default)]
    error_code: Option<u16>,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            error_code: value.code.api_code(),
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl From<ErrorDto> for Error {
    fn from(value: ErrorDto) -> Self {
        let ErrorDto {
            code,
            error_code: _,
            message,
            trace_id,
            details,
        } = value;
        let mut error = Error::new(code, message);
        error.trace_id = trace_id.filter(|id| !id.trim().is_empty());
        error.details = details;
        error
    }
}
