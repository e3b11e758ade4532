//! Next-page arithmetic for the post listing.

/// Number of posts shown per listing page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Pagination state for one listing render.
///
/// `current_page` is the caller-supplied page exactly as given; out-of-range
/// values are not clamped here (an out-of-range page simply produces an empty
/// slice from the store, or a store error for a negative skip).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: i64,
    pub next_page: Option<i64>,
}

/// Compute the pagination state for `page` given the total post count.
///
/// A next page exists iff `page + 1 <= ceil(total_count / per_page)`.
pub fn paginate(page: i64, total_count: u64, per_page: u64) -> PageInfo {
    let page_count = total_count.div_ceil(per_page) as i64;
    let next = page + 1;

    PageInfo {
        current_page: page,
        next_page: (next <= page_count).then_some(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference predicate in its other algebraic form: more content remains
    // after `page` full pages iff page * per_page < total_count.
    fn has_next_by_remainder(page: i64, total_count: u64, per_page: u64) -> bool {
        page > 0 && (page as u64) * per_page < total_count
    }

    #[test]
    fn both_formulations_agree_for_positive_pages() {
        for total in [0u64, 1, 9, 10, 11, 25] {
            for page in 1i64..=5 {
                let info = paginate(page, total, 10);
                assert_eq!(
                    info.next_page.is_some(),
                    has_next_by_remainder(page, total, 10),
                    "total={total} page={page}"
                );
            }
        }
    }

    #[test]
    fn first_page_of_fifteen_has_a_second_page() {
        let info = paginate(1, 15, 10);
        assert_eq!(info.current_page, 1);
        assert_eq!(info.next_page, Some(2));
    }

    #[test]
    fn second_page_of_fifteen_is_the_last() {
        assert_eq!(paginate(2, 15, 10).next_page, None);
    }

    #[test]
    fn empty_store_has_no_next_page() {
        assert_eq!(paginate(1, 0, 10).next_page, None);
    }

    #[test]
    fn exact_multiple_ends_on_the_boundary() {
        assert_eq!(paginate(1, 10, 10).next_page, None);
        assert_eq!(paginate(1, 11, 10).next_page, Some(2));
    }

    #[test]
    fn out_of_range_pages_pass_through_unclamped() {
        // No lower-bound validation: the caller's page is echoed back.
        assert_eq!(paginate(0, 15, 10).current_page, 0);
        assert_eq!(paginate(0, 15, 10).next_page, Some(1));
        assert_eq!(paginate(-5, 15, 10).current_page, -5);
        assert_eq!(paginate(-5, 15, 10).next_page, Some(-4));
        assert_eq!(paginate(99, 15, 10).next_page, None);
    }
}
