/// Externally owned pagination position.
///
/// The control only reads this; page changes are requested through the
/// caller's callback and the caller decides whether to apply them.
/// `1 <= current_page <= max(total_pages, 1)` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationState {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Number of pages needed for `item_count` items.
    pub fn for_items(current_page: usize, item_count: usize, per_page: usize) -> Self {
        Self::new(current_page, item_count.div_ceil(per_page.max(1)))
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Whether there is anything to paginate at all.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    pub fn contains(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}
