//! Conversions between page requests and SQL `LIMIT` / `OFFSET` values.

use pagination::PageRequest;

/// `LIMIT` and `OFFSET` for `request`, or `None` if either overflows `i64`.
pub(crate) fn limit_offset(request: PageRequest) -> Option<(i64, i64)> {
    let limit = i64::from(request.per_page());
    let offset = i64::try_from(request.offset()).ok()?;
    Some((limit, offset))
}

/// Convert a `COUNT(*)` result; negative counts cannot occur.
pub(crate) fn total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn third_page_skips_two_pages() {
        let request = PageRequest::new(3, 25).expect("valid page request");
        assert_eq!(limit_offset(request), Some((25, 50)));
    }

    #[rstest]
    fn offsets_beyond_i64_are_rejected() {
        let request = PageRequest::new(u32::MAX, u32::MAX).expect("valid page request");
        assert_eq!(limit_offset(request), None);
    }
}
