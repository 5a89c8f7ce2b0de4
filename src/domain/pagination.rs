// src/domain/pagination.rs

use std::ops::RangeInclusive;

pub const PAGE_SIZE: usize = 20;

/// Width of the numbered page buttons strip.
pub const PAGE_WINDOW: usize = 5;

/// One page of results plus what the controls need to render.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

/// Slices out page `current` (1-based). Pages past the end are empty,
/// never an error, and `current` is kept as given.
pub fn paginate<T>(items: &[T], current: usize, page_size: usize) -> Page<'_, T> {
    let current = current.max(1);
    let start = (current - 1).saturating_mul(page_size).min(items.len());
    let end = current.saturating_mul(page_size).min(items.len());

    Page {
        items: &items[start..end],
        current,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
        page_size,
    }
}

/// `ceil(len / page_size)`; zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Page numbers for the button strip: every page when there are at most
/// five, otherwise five pages centered on `current` and clamped to
/// `1..=total`.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    if total <= PAGE_WINDOW {
        return 1..=total;
    }

    let start = current
        .saturating_sub(PAGE_WINDOW / 2)
        .clamp(1, total - PAGE_WINDOW + 1);
    start..=start + PAGE_WINDOW - 1
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn prev(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> usize {
        (self.current + 1).min(self.total_pages).max(1)
    }

    pub fn window(&self) -> RangeInclusive<usize> {
        page_window(self.current, self.total_pages)
    }

    /// 1-based "showing first..=last" bounds, `None` when nothing is shown.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current - 1) * self.page_size + 1;
        let last = (self.current * self.page_size).min(self.total_items);
        Some((first, last))
    }
}
