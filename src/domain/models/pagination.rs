//! Pagination Value Object
//!
//! Describes one page of a list result. Derived per query, never persisted.

/// Page descriptor returned alongside list results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

impl Pagination {
    /// Build a descriptor, deriving `total_pages = ceil(total_count / page_size)`.
    ///
    /// A non-positive `page_size` yields zero pages.
    #[must_use]
    pub fn new(page: i64, page_size: i64, total_count: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };

        Self {
            page,
            page_size,
            total_pages,
            total_count,
        }
    }

    /// Row offset of the first item on `page` (pages start at 1)
    #[must_use]
    pub fn offset(page: i64, page_size: i64) -> i64 {
        page.saturating_sub(1).saturating_mul(page_size).max(0)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 10, 30).total_pages, 3);
        assert_eq!(Pagination::new(1, 10, 31).total_pages, 4);
        assert_eq!(Pagination::new(1, 10, 1).total_pages, 1);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let pagination = Pagination::new(1, 20, 0);
        assert_eq!(pagination.total_pages, 0);
        assert!(!pagination.has_next());
        assert!(!pagination.has_prev());
    }

    #[test]
    fn test_zero_page_size_has_no_pages() {
        assert_eq!(Pagination::new(1, 0, 10).total_pages, 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::offset(1, 20), 0);
        assert_eq!(Pagination::offset(2, 10), 10);
        assert_eq!(Pagination::offset(0, 10), 0);
        assert_eq!(Pagination::offset(i64::MAX, 100), i64::MAX);
    }

    #[test]
    fn test_navigation_flags() {
        let first = Pagination::new(1, 10, 20);
        assert!(first.has_next());
        assert!(!first.has_prev());

        let last = Pagination::new(2, 10, 20);
        assert!(!last.has_next());
        assert!(last.has_prev());
    }
}
