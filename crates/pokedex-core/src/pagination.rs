//! Offset/limit pagination and page-number link layout.

/// Position within a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// 1-based page index, never 0
    page: u32,
    /// Never 0
    page_size: u32,
    /// Size of the whole collection
    total: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            total: 0,
        }
    }
}

impl Pager {
    /// Page and page size are clamped to at least 1.
    pub fn new(page: u32, page_size: u32, total: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Move to `page`, clamped to at least 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_total(&mut self, total: u32) {
        self.total = total;
    }

    /// `ceil(total / page_size)`; 0 for an empty collection
    pub fn page_count(&self) -> u32 {
        self.total.div_ceil(self.page_size)
    }

    /// Index of the first row of the current page
    pub fn offset(&self) -> u32 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn previous_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        if self.has_next() {
            self.page + 1
        } else {
            self.page
        }
    }

    pub fn links(&self) -> Vec<PageLink> {
        page_links(self.page, self.page_count())
    }
}

/// One slot of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: u32, current: bool },
    Ellipsis,
}

/// Page-number strip for `current` out of `page_count` pages.
///
/// Shows the first page, the last page and the neighbours of `current`;
/// an ellipsis takes the place of `current - 2` / `current + 2` when that
/// page is strictly inside the range.
pub fn page_links(current: u32, page_count: u32) -> Vec<PageLink> {
    let mut links = Vec::new();
    for number in 1..=page_count {
        if number == 1 || number == page_count || number.abs_diff(current) <= 1 {
            links.push(PageLink::Page {
                number,
                current: number == current,
            });
        } else if (number + 2 == current && number > 1)
            || (number == current + 2 && number < page_count)
        {
            links.push(PageLink::Ellipsis);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<u32> {
        links
            .iter()
            .filter_map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_offset_and_page_count() {
        let pager = Pager::new(3, 20, 1302);
        assert_eq!(pager.offset(), 40);
        assert_eq!(pager.page_count(), 66);

        assert_eq!(Pager::new(1, 20, 0).page_count(), 0);
        assert_eq!(Pager::new(1, 20, 20).page_count(), 1);
        assert_eq!(Pager::new(1, 20, 21).page_count(), 2);
    }

    #[test]
    fn test_zero_page_and_size_are_clamped() {
        let pager = Pager::new(0, 0, 10);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.page_count(), 10);

        let mut pager = Pager::new(4, 5, 100);
        pager.set_page(0);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.offset(), 0);
        pager.set_total(3);
        assert_eq!(pager.total(), 3);
        assert_eq!(pager.page_count(), 1);
    }

    #[test]
    fn test_last_page_offset_within_total() {
        for total in 1..=120u32 {
            for size in 1..=25u32 {
                let last = Pager::new(1, size, total).page_count();
                let pager = Pager::new(last, size, total);
                assert!(pager.offset() < total, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn test_prev_next_edges() {
        let first = Pager::new(1, 20, 100);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.previous_page(), 1);

        let last = Pager::new(5, 20, 100);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next_page(), 5);

        let empty = Pager::new(1, 20, 0);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
        assert!(empty.links().is_empty());
    }

    #[test]
    fn test_links_middle_page() {
        let links = page_links(5, 10);
        assert_eq!(numbers(&links), vec![1, 4, 5, 6, 10]);
        assert_eq!(
            links,
            vec![
                PageLink::Page { number: 1, current: false },
                PageLink::Ellipsis,
                PageLink::Page { number: 4, current: false },
                PageLink::Page { number: 5, current: true },
                PageLink::Page { number: 6, current: false },
                PageLink::Ellipsis,
                PageLink::Page { number: 10, current: false },
            ]
        );
    }

    #[test]
    fn test_links_near_edges() {
        assert_eq!(
            page_links(1, 10),
            vec![
                PageLink::Page { number: 1, current: true },
                PageLink::Page { number: 2, current: false },
                PageLink::Ellipsis,
                PageLink::Page { number: 10, current: false },
            ]
        );
        // Page 1 is a neighbour's neighbour: no ellipsis needed on the left
        assert_eq!(numbers(&page_links(3, 10)), vec![1, 2, 3, 4, 10]);
        assert_eq!(page_links(3, 10)[4], PageLink::Ellipsis);
        assert_eq!(numbers(&page_links(10, 10)), vec![1, 9, 10]);
        assert_eq!(numbers(&page_links(1, 1)), vec![1]);
        assert_eq!(numbers(&page_links(2, 3)), vec![1, 2, 3]);
    }
}
