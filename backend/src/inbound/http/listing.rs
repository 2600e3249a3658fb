//! Query parsing and rendering for paginated collections.

use actix_web::{HttpRequest, HttpResponse};
use pagination::{Page, PageEnvelope, PageRequest};
use serde::{Deserialize, Serialize};

use crate::domain::Error;

/// `?page=&limit=` query accepted by every list endpoint.
///
/// Both are signed so out-of-range values reach [`PageLimits::page_request`]
/// instead of failing extraction.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    /// One-based page number; values below 1 are treated as 1.
    pub page: Option<i64>,
    /// Page size; defaults to the configured default.
    pub limit: Option<i64>,
}

/// Rejection reasons for page-size settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageLimitsError {
    /// A limit of zero would never return rows.
    #[error("page limits must be at least 1")]
    Zero,
    /// The default must be servable.
    #[error("default limit {default} exceeds maximum {max}")]
    DefaultAboveMax {
        /// Configured default.
        default: u32,
        /// Configured maximum.
        max: u32,
    },
}

/// Default and maximum page size for list endpoints.
///
/// ## Invariants
/// - `1 <= default <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    default: u32,
    max: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default: 10,
            max: 100,
        }
    }
}

impl PageLimits {
    /// Validate a default/maximum pair.
    ///
    /// # Examples
    /// ```
    /// use crm_backend::inbound::http::listing::{PageLimits, PageLimitsError};
    ///
    /// assert!(PageLimits::new(10, 100).is_ok());
    /// assert_eq!(PageLimits::new(0, 100), Err(PageLimitsError::Zero));
    /// ```
    pub fn new(default: u32, max: u32) -> Result<Self, PageLimitsError> {
        if default == 0 || max == 0 {
            return Err(PageLimitsError::Zero);
        }
        if default > max {
            return Err(PageLimitsError::DefaultAboveMax { default, max });
        }
        Ok(Self { default, max })
    }

    /// Page size used when the client sends none.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default
    }

    /// Largest page size a client may request.
    #[must_use]
    pub const fn max_limit(&self) -> u32 {
        self.max
    }

    /// Turn a client query into a page request.
    ///
    /// A limit above the maximum is `error_code` 30; a limit of zero or less
    /// is `error_code` 41.
    pub fn page_request(&self, query: ListQuery) -> Result<PageRequest, Error> {
        let limit = query.limit.unwrap_or(i64::from(self.default));
        if limit > i64::from(self.max) {
            return Err(Error::limit_too_big(self.max));
        }
        let limit = u32::try_from(limit)
            .map_err(|_| Error::invalid_parameters("limit must be positive"))?;
        let page = query
            .page
            .unwrap_or(1)
            .clamp(1, i64::from(u32::MAX));
        let page = u32::try_from(page).unwrap_or(u32::MAX);
        PageRequest::new(page, limit).map_err(|err| Error::invalid_parameters(err.to_string()))
    }
}

/// Collection URL the request was made against, without its query string.
fn collection_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), req.path())
}

/// Render `page` as a `{ data, links, meta }` document.
pub fn render_page<T, R>(
    req: &HttpRequest,
    page: Page<T>,
    present: impl FnMut(T) -> R,
) -> Result<HttpResponse, Error>
where
    R: Serialize,
{
    let envelope = PageEnvelope::from_page(page.map(present), &collection_url(req))
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Ok().json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    fn query(page: Option<i64>, limit: Option<i64>) -> ListQuery {
        ListQuery { page, limit }
    }

    #[rstest]
    fn defaults_apply_when_absent() {
        let request = PageLimits::default()
            .page_request(ListQuery::default())
            .expect("defaults are valid");
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 10);
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-4))]
    fn low_pages_clamp_to_one(#[case] page: Option<i64>) {
        let request = PageLimits::default()
            .page_request(query(page, Some(5)))
            .expect("valid");
        assert_eq!(request.page(), 1);
    }

    #[rstest]
    fn maximum_limit_is_accepted() {
        let request = PageLimits::default()
            .page_request(query(None, Some(100)))
            .expect("at maximum");
        assert_eq!(request.per_page(), 100);
    }

    #[rstest]
    fn limit_above_maximum_is_code_30() {
        let err = PageLimits::default()
            .page_request(query(None, Some(101)))
            .expect_err("too big");
        assert_eq!(err.code(), ErrorCode::LimitTooBig);
        assert_eq!(err.code().api_code(), Some(30));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn non_positive_limit_is_code_41(#[case] limit: i64) {
        let err = PageLimits::default()
            .page_request(query(None, Some(limit)))
            .expect_err("not positive");
        assert_eq!(err.code(), ErrorCode::InvalidParameters);
    }

    #[rstest]
    #[case(10, 5, PageLimitsError::DefaultAboveMax { default: 10, max: 5 })]
    #[case(0, 5, PageLimitsError::Zero)]
    fn rejects_inconsistent_limits(
        #[case] default: u32,
        #[case] max: u32,
        #[case] expected: PageLimitsError,
    ) {
        assert_eq!(PageLimits::new(default, max), Err(expected));
    }

    #[rstest]
    fn collection_url_drops_the_query() {
        let req = TestRequest::get()
            .uri("/api/v1/calls?page=2&limit=3")
            .insert_header(("host", "crm.test"))
            .to_http_request();
        assert_eq!(collection_url(&req), "http://crm.test/api/v1/calls");
    }
}
