//! Page slicing for ordered listings.

/// Page number used when none is requested
pub const DEFAULT_PAGE_NUMBER: u32 = 0;

/// Page size used when none is requested
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Zero-based page selection. Missing values fall back to page 0 of size 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub fn new(page_number: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Index range `[from, to)` this page covers in a sequence of `len` items.
    ///
    /// The upper bound is clamped to `len`; a page that starts at or past the
    /// end is empty rather than an error.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.page_size() as usize;
        let from = (self.page_number() as usize).saturating_mul(size).min(len);
        let to = from.saturating_add(size).min(len);
        (from, to)
    }
}

/// Keep only the items on the requested page.
pub fn paginate<T>(mut items: Vec<T>, page: PageRequest) -> Vec<T> {
    let (from, to) = page.bounds(items.len());
    items.truncate(to);
    items.drain(..from);
    items
}
