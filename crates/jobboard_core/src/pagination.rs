pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Number of pages needed to show `total` results, `limit` per page.
pub fn page_count_for(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let pages = total.div_ceil(limit);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Current page plus the page count derived from the last successful load.
///
/// `page_count` only moves on a successful commit; a failed load keeps the
/// previous value so navigation stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
    page_count: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            page_count: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.page_count).contains(&page)
    }

    /// Moves to `page` if it lies in `[1, page_count]`.
    pub(crate) fn go_to(&mut self, page: u32) -> bool {
        if !self.contains(page) {
            return false;
        }
        self.page = page;
        true
    }

    /// Next page, or `None` when already on (or past) the last page.
    pub(crate) fn next_target(&self) -> Option<u32> {
        let target = self.page.checked_add(1)?;
        self.contains(target).then_some(target)
    }

    /// Previous page. A page left beyond the end by a shrinking result set is
    /// clamped back to the last page here.
    pub(crate) fn prev_target(&self) -> Option<u32> {
        let target = self.page.saturating_sub(1).min(self.page_count);
        self.contains(target).then_some(target)
    }

    pub(crate) fn reset(&mut self) {
        self.page = 1;
    }

    pub(crate) fn apply_total(&mut self, total: u64) {
        self.page_count = page_count_for(total, self.limit);
    }
}
