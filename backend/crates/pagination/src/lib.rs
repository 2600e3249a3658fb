//! Offset pagination primitives shared by the CRM backend list endpoints.
//!
//! A [`PageRequest`] describes which slice of a collection the caller wants,
//! a [`Page`] carries that slice together with the collection total, and
//! [`PageEnvelope`] renders a page as the `data` / `links` / `meta` document
//! returned to API clients.

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors raised while building pagination values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The requested page size was zero.
    #[error("per-page size must be at least 1")]
    ZeroPerPage,
    /// The base URL used for page links could not be parsed.
    #[error("invalid page base url `{url}`: {message}")]
    InvalidBaseUrl {
        /// The offending URL text.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// One-based page number and page size requested by a client.
///
/// ## Invariants
/// - `page` is at least 1.
/// - `per_page` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Build a request, clamping `page` to 1 and rejecting a zero page size.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(0, 25).expect("non-zero page size");
    /// assert_eq!(request.page(), 1);
    /// assert_eq!(request.offset(), 0);
    /// ```
    pub fn new(page: u32, per_page: u32) -> Result<Self, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::ZeroPerPage);
        }
        Ok(Self {
            page: page.max(1),
            per_page,
        })
    }

    /// Requested one-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of rows to skip before the requested page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

/// A slice of a collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    request: PageRequest,
}

impl<T> Page<T> {
    /// Assemble a page from its items, the collection total, and the request.
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// An empty page for the given request.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// The request this page answers.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        self.request
    }

    /// Number of the last page; an empty collection still has page 1.
    #[must_use]
    pub fn last_page(&self) -> u64 {
        self.total.div_ceil(u64::from(self.request.per_page)).max(1)
    }

    /// Transform every item while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    /// Fallible variant of [`Page::map`].
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            items,
            total: self.total,
            request: self.request,
        })
    }

    /// Split the page into its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Navigation links for a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// Link to page 1.
    pub first: String,
    /// Link to the last page.
    pub last: String,
    /// Link to the previous page, absent on page 1.
    pub prev: Option<String>,
    /// Link to the next page, absent on the last page.
    pub next: Option<String>,
}

/// Counters describing a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current one-based page number.
    pub current_page: u32,
    /// One-based position of the first item on the page, if any.
    pub from: Option<u64>,
    /// Number of the last page.
    pub last_page: u64,
    /// Base URL of the collection, without a query string.
    pub path: String,
    /// Page size in force.
    pub per_page: u32,
    /// One-based position of the last item on the page, if any.
    pub to: Option<u64>,
    /// Total number of items.
    pub total: u64,
}

/// Client-facing page document: `{ data, links, meta }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Navigation links.
    pub links: PageLinks,
    /// Paging counters.
    pub meta: PageMeta,
}

impl<T> PageEnvelope<T> {
    /// Render `page` against the collection's base URL.
    ///
    /// Any query string on `base_url` is discarded; links carry `limit` and
    /// `page` parameters only.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageEnvelope, PageRequest};
    ///
    /// let request = PageRequest::new(2, 2).expect("valid request");
    /// let page = Page::new(vec!["c", "d"], 5, request);
    /// let envelope = PageEnvelope::from_page(page, "http://localhost/api/v1/calls")
    ///     .expect("valid url");
    /// assert_eq!(envelope.meta.last_page, 3);
    /// assert_eq!(envelope.meta.from, Some(3));
    /// assert_eq!(
    ///     envelope.links.next.as_deref(),
    ///     Some("http://localhost/api/v1/calls?limit=2&page=3")
    /// );
    /// ```
    pub fn from_page(page: Page<T>, base_url: &str) -> Result<Self, PaginationError> {
        let mut base = Url::parse(base_url).map_err(|err| PaginationError::InvalidBaseUrl {
            url: base_url.to_owned(),
            message: err.to_string(),
        })?;
        base.set_query(None);
        base.set_fragment(None);

        let request = page.request();
        let last_page = page.last_page();
        let current = u64::from(request.page());
        let count = u64::try_from(page.items().len()).unwrap_or(u64::MAX);
        let (from, to) = if count == 0 {
            (None, None)
        } else {
            let from = request.offset() + 1;
            (Some(from), Some(from + count - 1))
        };

        let link = |number: u64| page_link(&base, request.per_page(), number);
        let links = PageLinks {
            first: link(1),
            last: link(last_page),
            prev: (current > 1).then(|| link(current - 1)),
            next: (current < last_page).then(|| link(current + 1)),
        };
        let meta = PageMeta {
            current_page: request.page(),
            from,
            last_page,
            path: base.as_str().to_owned(),
            per_page: request.per_page(),
            to,
            total: page.total(),
        };

        Ok(Self {
            data: page.into_items(),
            links,
            meta,
        })
    }
}

fn page_link(base: &Url, per_page: u32, page: u64) -> String {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("limit", &per_page.to_string())
        .append_pair("page", &page.to_string());
    url.into()
}
