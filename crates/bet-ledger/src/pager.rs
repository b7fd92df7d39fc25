//! Fixed-size pages over a filtered view.

/// Records shown per table page.
pub const PAGE_SIZE: usize = 20;

/// Slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `items`.
///
/// `page` is 1-based and not clamped here; a page past the end is empty.
pub fn page<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items (0 for an empty view).
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page into `[1, total]`, treating an empty view as one page.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}
