/// Paging state for the listings table: 1-based page counter plus the
/// last-known total reported by the CRM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pager {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

impl Pager {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        Self {
            page: page.max(1),
            page_size,
            total,
        }
    }

    /// Offset passed to the listing endpoint.
    pub fn start(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page * self.page_size < self.total
    }

    /// 1-based index of the first row on this page ("Showing X to ...").
    pub fn showing_from(&self) -> i64 {
        (self.page - 1) * self.page_size + 1
    }

    /// 1-based index of the last row on this page ("... to Y of Z").
    pub fn showing_to(&self) -> i64 {
        (self.page * self.page_size).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_disabled_exactly_on_first_page() {
        assert!(!Pager::new(1, 50, 500).has_prev());
        assert!(Pager::new(2, 50, 500).has_prev());
    }

    #[test]
    fn next_disabled_exactly_when_page_times_size_reaches_total() {
        // 120 items at 50/page: pages 1 and 2 have a next, page 3 does not.
        assert!(Pager::new(1, 50, 120).has_next());
        assert!(Pager::new(2, 50, 120).has_next());
        assert!(!Pager::new(3, 50, 120).has_next());

        // Exact multiple: 100 items, page 2 * 50 == 100 -> disabled.
        assert!(!Pager::new(2, 50, 100).has_next());

        // Empty result set.
        assert!(!Pager::new(1, 50, 0).has_next());
    }

    #[test]
    fn start_offset_is_zero_based() {
        assert_eq!(Pager::new(1, 50, 500).start(), 0);
        assert_eq!(Pager::new(3, 50, 500).start(), 100);
    }

    #[test]
    fn showing_range_clamps_to_total() {
        let p = Pager::new(3, 50, 120);
        assert_eq!(p.showing_from(), 101);
        assert_eq!(p.showing_to(), 120);
    }

    #[test]
    fn page_is_clamped_to_one() {
        assert_eq!(Pager::new(0, 50, 10).page, 1);
        assert_eq!(Pager::new(-4, 50, 10).page, 1);
    }
}
