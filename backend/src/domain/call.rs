//! Logged phone calls with a contact.

use chrono::{DateTime, Utc};

use super::{AccountId, CallId, ContactId, ContactSummary};

/// Maximum length of a call note, counted in Unicode scalar values.
pub const CALL_CONTENT_MAX_CHARS: usize = 100_000;

/// Errors raised when constructing call values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CallValidationError {
    /// Content was empty or whitespace only.
    #[error("call content must not be empty")]
    EmptyContent,
    /// Content exceeded [`CALL_CONTENT_MAX_CHARS`].
    #[error("call content has {actual} characters; the maximum is {max}")]
    ContentTooLong {
        /// Allowed maximum.
        max: usize,
        /// Observed length.
        actual: usize,
    },
}

/// Validated call note.
///
/// ## Invariants
/// - Not blank.
/// - At most [`CALL_CONTENT_MAX_CHARS`] characters.
///
/// # Examples
/// ```
/// use crm_backend::domain::{CallContent, CallValidationError};
///
/// assert!(CallContent::new("Talked about the trip").is_ok());
/// assert_eq!(CallContent::new("  "), Err(CallValidationError::EmptyContent));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContent(String);

impl CallContent {
    /// Validate and wrap a call note. The text is stored as given.
    pub fn new(content: impl Into<String>) -> Result<Self, CallValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(CallValidationError::EmptyContent);
        }
        let actual = content.chars().count();
        if actual > CALL_CONTENT_MAX_CHARS {
            return Err(CallValidationError::ContentTooLong {
                max: CALL_CONTENT_MAX_CHARS,
                actual,
            });
        }
        Ok(Self(content))
    }

    /// Borrow the note text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Take ownership of the note text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CallContent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Every caller-controlled field of a call.
///
/// Used for both creation and full replacement; there is no partial form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDraft {
    /// Note text.
    pub content: CallContent,
    /// When the call took place.
    pub called_at: DateTime<Utc>,
    /// Contact the call was with.
    pub contact_id: ContactId,
}

/// A persisted call together with its contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Call key.
    pub id: CallId,
    /// Owning account.
    pub account_id: AccountId,
    /// Contact the call was with.
    pub contact: ContactSummary,
    /// Note text.
    pub content: String,
    /// When the call took place.
    pub called_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, if ever modified.
    pub updated_at: Option<DateTime<Utc>>,
}
