//! Offset pagination primitives shared by list endpoints.
//!
//! A [`PageRequest`] captures a validated page number and page size. Storage
//! adapters translate it into `OFFSET`/`LIMIT` via [`PageRequest::offset`] and
//! [`PageRequest::limit`]. A [`Paged`] envelope carries one slice of an ordered
//! collection together with the metadata clients need to compute navigation.
//!
//! ```
//! use pagination::{PageRequest, Paged};
//!
//! let request = PageRequest::try_new(2, 5).expect("valid page request");
//! assert_eq!(request.offset(), 5);
//!
//! let page = Paged::new(vec!["f", "g"], 7, request);
//! assert_eq!(page.total_pages, 2);
//! ```

use serde::{Deserialize, Serialize};

/// Page number used when the client omits one.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Page size used when the client omits one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A single reason a page request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The page number was below one.
    #[error("page number must be at least 1")]
    PageNumberTooSmall,
    /// The page size was below [`MIN_PAGE_SIZE`].
    #[error("page size must be at least 1")]
    PageSizeTooSmall,
    /// The page size exceeded [`MAX_PAGE_SIZE`].
    #[error("page size must not exceed 100")]
    PageSizeTooLarge,
}

/// Validated offset pagination request.
///
/// ## Invariants
/// - `page_number >= 1`
/// - `MIN_PAGE_SIZE <= page_size <= MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page_number: u64,
    page_size: u32,
}

impl PageRequest {
    /// Validate raw client input.
    ///
    /// Every violated bound is reported rather than only the first one so
    /// callers can surface a complete error map.
    ///
    /// # Errors
    /// Returns all [`PageRequestError`]s that apply to the input.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// let errors = PageRequest::try_new(0, 101).expect_err("both bounds violated");
    /// assert_eq!(
    ///     errors,
    ///     vec![PageRequestError::PageNumberTooSmall, PageRequestError::PageSizeTooLarge]
    /// );
    /// ```
    pub fn try_new(page_number: i64, page_size: i64) -> Result<Self, Vec<PageRequestError>> {
        let mut errors = Vec::new();

        let number = u64::try_from(page_number)
            .ok()
            .filter(|number| *number >= u64::from(DEFAULT_PAGE_NUMBER));
        if number.is_none() {
            errors.push(PageRequestError::PageNumberTooSmall);
        }

        let size = if page_size < i64::from(MIN_PAGE_SIZE) {
            errors.push(PageRequestError::PageSizeTooSmall);
            None
        } else if page_size > i64::from(MAX_PAGE_SIZE) {
            errors.push(PageRequestError::PageSizeTooLarge);
            None
        } else {
            u32::try_from(page_size).ok()
        };

        match (number, size) {
            (Some(page_number), Some(page_size)) => Ok(Self {
                page_number,
                page_size,
            }),
            _ => Err(errors),
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items skipped before this page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page_number
            .saturating_sub(1)
            .saturating_mul(u64::from(self.page_size))
    }

    /// Number of items to take for this page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: u64::from(DEFAULT_PAGE_NUMBER),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of an ordered collection plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// Items on this page, in collection order.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total_count: u64,
    /// One-based page number that produced this slice.
    pub page_number: u64,
    /// Requested page size.
    pub page_size: u32,
    /// `ceil(total_count / page_size)`.
    pub total_pages: u64,
}

impl<T> Paged<T> {
    /// Build a page envelope, deriving `total_pages` from the request.
    #[must_use]
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_pages: total_count.div_ceil(u64::from(request.page_size())),
        }
    }

    /// Transform the items while keeping the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Paged<U>
    where
        F: FnMut(T) -> U,
    {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for page request validation and envelopes.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(1, 1)]
    #[case(1, 100)]
    #[case(42, 5)]
    fn accepts_values_within_bounds(#[case] number: i64, #[case] size: i64) {
        let request = PageRequest::try_new(number, size).expect("within bounds");
        assert_eq!(
            request.page_number(),
            u64::try_from(number).expect("positive number")
        );
        assert_eq!(i64::from(request.page_size()), size);
    }

    #[rstest]
    fn accepts_page_numbers_beyond_u32() {
        let number = i64::from(u32::MAX) + 1;
        let request = PageRequest::try_new(number, 5).expect("no upper bound on page number");
        assert_eq!(request.page_number(), u64::from(u32::MAX) + 1);
        assert_eq!(request.offset(), u64::from(u32::MAX) * 5);
    }

    #[rstest]
    fn offset_saturates_for_largest_page_number() {
        let request = PageRequest::try_new(i64::MAX, 100).expect("within bounds");
        assert_eq!(request.offset(), u64::MAX);
    }

    #[rstest]
    #[case(0, 5, vec![PageRequestError::PageNumberTooSmall])]
    #[case(-3, 5, vec![PageRequestError::PageNumberTooSmall])]
    #[case(1, 0, vec![PageRequestError::PageSizeTooSmall])]
    #[case(1, 101, vec![PageRequestError::PageSizeTooLarge])]
    #[case(
        0,
        0,
        vec![PageRequestError::PageNumberTooSmall, PageRequestError::PageSizeTooSmall]
    )]
    fn rejects_out_of_bounds_values(
        #[case] number: i64,
        #[case] size: i64,
        #[case] expected: Vec<PageRequestError>,
    ) {
        let errors = PageRequest::try_new(number, size).expect_err("out of bounds");
        assert_eq!(errors, expected);
    }

    #[rstest]
    #[case(1, 5, 0)]
    #[case(2, 5, 5)]
    #[case(3, 100, 200)]
    fn offset_skips_previous_pages(#[case] number: i64, #[case] size: i64, #[case] offset: u64) {
        let request = PageRequest::try_new(number, size).expect("within bounds");
        assert_eq!(request.offset(), offset);
        assert_eq!(request.limit(), u64::try_from(size).expect("positive size"));
    }

    #[rstest]
    fn default_request_is_first_page_of_five() {
        let request = PageRequest::default();
        assert_eq!(request.page_number(), u64::from(DEFAULT_PAGE_NUMBER));
        assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(5, 1)]
    #[case(7, 2)]
    #[case(10, 2)]
    #[case(11, 3)]
    fn total_pages_rounds_up(#[case] total: u64, #[case] pages: u64) {
        let request = PageRequest::try_new(1, 5).expect("within bounds");
        let page: Paged<u8> = Paged::new(Vec::new(), total, request);
        assert_eq!(page.total_pages, pages);
    }

    #[rstest]
    fn envelope_serialises_with_camel_case_keys() {
        let request = PageRequest::try_new(2, 5).expect("within bounds");
        let page = Paged::new(vec![1, 2], 7, request);
        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(
            value,
            json!({
                "items": [1, 2],
                "totalCount": 7,
                "pageNumber": 2,
                "pageSize": 5,
                "totalPages": 2
            })
        );
    }

    #[rstest]
    fn map_preserves_metadata() {
        let request = PageRequest::try_new(1, 2).expect("within bounds");
        let page = Paged::new(vec![1, 2], 3, request).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.total_pages, 2);
    }
}
