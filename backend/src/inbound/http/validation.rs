//! Request body validation for inbound HTTP adapters.
//!
//! Bodies are checked field by field and every failure is collected, so a
//! client sees all problems with a payload in one `error_code` 32 response.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::{CallContent, CallDraft, CallValidationError, ContactId, Error};

/// JSON key paired with the label used in client-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName {
    key: &'static str,
    label: &'static str,
}

impl FieldName {
    pub(crate) const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }

    fn key(&self) -> &'static str {
        self.key
    }
}

pub(crate) const CONTENT: FieldName = FieldName::new("content", "content");
pub(crate) const CALLED_AT: FieldName = FieldName::new("called_at", "called at");
pub(crate) const CONTACT_ID: FieldName = FieldName::new("contact_id", "contact id");

/// Collects per-field messages while a body is checked.
#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn push(&mut self, field: FieldName, rule: &str) {
        self.0.push(format!("The {} {rule}", field.label));
    }

    fn required(&mut self, field: FieldName) {
        self.0.push(format!("The {} field is required.", field.label));
    }

    fn into_error(self) -> Error {
        Error::validation_failed(self.0)
    }
}

/// Missing, `null`, whitespace-only strings and empty collections all count
/// as absent.
fn present<'a>(body: &'a Map<String, Value>, field: FieldName) -> Option<&'a Value> {
    body.get(field.key()).filter(|value| match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    })
}

fn content_field(body: &Map<String, Value>, violations: &mut Violations) -> Option<CallContent> {
    let Some(value) = present(body, CONTENT) else {
        violations.required(CONTENT);
        return None;
    };
    let Some(text) = value.as_str() else {
        violations.push(CONTENT, "must be a string.");
        return None;
    };
    match CallContent::new(text) {
        Ok(content) => Some(content),
        Err(CallValidationError::EmptyContent) => {
            violations.required(CONTENT);
            None
        }
        Err(CallValidationError::ContentTooLong { max, .. }) => {
            violations.push(CONTENT, &format!("may not be greater than {max} characters."));
            None
        }
    }
}

fn called_at_field(
    body: &Map<String, Value>,
    violations: &mut Violations,
) -> Option<DateTime<Utc>> {
    let Some(value) = present(body, CALLED_AT) else {
        violations.required(CALLED_AT);
        return None;
    };
    let parsed = value.as_str().and_then(parse_date);
    if parsed.is_none() {
        violations.push(CALLED_AT, "is not a valid date.");
    }
    parsed
}

fn contact_id_field(body: &Map<String, Value>, violations: &mut Violations) -> Option<ContactId> {
    let Some(value) = present(body, CONTACT_ID) else {
        violations.required(CONTACT_ID);
        return None;
    };
    let parsed = parse_integer(value).map(ContactId::new);
    if parsed.is_none() {
        violations.push(CONTACT_ID, "must be an integer.");
    }
    parsed
}

/// Parse a calendar date or date-time.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD`. Values without an offset are taken as UTC; a bare date is
/// midnight UTC.
pub(crate) fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(at.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

/// JSON integers and strings holding a decimal integer.
pub(crate) fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Validate a create or update body into a full [`CallDraft`].
///
/// # Errors
/// Returns `error_code` 32 listing every failing field, always in the order
/// content, called at, contact id.
pub(crate) fn parse_call_payload(body: &Map<String, Value>) -> Result<CallDraft, Error> {
    let mut violations = Violations::default();
    let content = content_field(body, &mut violations);
    let called_at = called_at_field(body, &mut violations);
    let contact_id = contact_id_field(body, &mut violations);
    match (content, called_at, contact_id) {
        (Some(content), Some(called_at), Some(contact_id)) => Ok(CallDraft {
            content,
            called_at,
            contact_id,
        }),
        _ => Err(violations.into_error()),
    }
}
