//! Configurable rendering of timestamps in API payloads.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Pattern used when none is configured; renders `2024-03-02T12:00:00Z`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The configured strftime pattern could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp format `{pattern}`")]
pub struct TimestampFormatError {
    /// Offending pattern.
    pub pattern: String,
}

/// Validated strftime pattern applied to every timestamp a resource renders.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use crm_backend::inbound::http::resources::TimestampFormat;
///
/// let format = TimestampFormat::new("%Y-%m-%d").expect("valid pattern");
/// let at = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).single().expect("valid date");
/// assert_eq!(format.render(at), "2024-03-02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat(String);

impl TimestampFormat {
    /// Validate `pattern`; rendering with an unparsable pattern would panic.
    pub fn new(pattern: impl Into<String>) -> Result<Self, TimestampFormatError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TimestampFormatError { pattern });
        }
        Ok(Self(pattern))
    }

    /// Render `at` in UTC.
    #[must_use]
    pub fn render(&self, at: DateTime<Utc>) -> String {
        at.format(&self.0).to_string()
    }

    /// Render an optional timestamp, keeping `None` as `None`.
    #[must_use]
    pub fn render_optional(&self, at: Option<DateTime<Utc>>) -> Option<String> {
        at.map(|at| self.render(at))
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP_FORMAT.to_owned())
    }
}
