//! Fixed-size pages over projection rows

/// Rows shown per page
pub const ITEMS_PER_PAGE: usize = 10;

/// Page cursor over a slice of rows. Pages are 1-indexed and the cursor is
/// always clamped to `1..=total_pages`.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: usize,
    current: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self::with_page_size(items, ITEMS_PER_PAGE)
    }

    pub fn with_page_size(items: &'a [T], per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
            current: 1,
        }
    }

    /// Number of pages; zero when there are no rows
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Jump to `page`, clamped into range
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Index of the first row on the current page within the full slice
    pub fn start_index(&self) -> usize {
        (self.current - 1) * self.per_page
    }

    /// Rows on the current page
    pub fn page(&self) -> &'a [T] {
        let start = self.start_index().min(self.items.len());
        let end = (start + self.per_page).min(self.items.len());
        &self.items[start..end]
    }
}
