//! Page arithmetic and the page-index control model.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::ops::{Range, RangeInclusive};

/// Number of pages needed for `matched` items; 0 when nothing matched.
#[must_use]
pub const fn page_count(matched: usize, page_size: NonZeroUsize) -> usize {
    matched.div_ceil(page_size.get())
}

/// Index range of `page` (1-based) within `len` items.
///
/// Page 0 and pages past the end give an empty range.
#[must_use]
pub fn page_bounds(page: usize, page_size: NonZeroUsize, len: usize) -> Range<usize> {
    let Some(index) = page.checked_sub(1) else {
        return 0..0;
    };

    let start = index.saturating_mul(page_size.get()).min(len);
    let end = start.saturating_add(page_size.get()).min(len);
    start..end
}

/// Clamp `page` into `[1, max(1, page_count)]`.
#[must_use]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// State of the Prev / 1 2 3 / Next control under a results grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControl {
    /// Current page (1-based)
    pub current: usize,
    /// Total pages
    pub page_count: usize,
}

impl PageControl {
    /// Build a control, clamping `current` into range
    #[must_use]
    pub fn new(current: usize, page_count: usize) -> Self {
        Self {
            current: clamp_page(current, page_count),
            page_count,
        }
    }

    /// The control is only rendered when there is more than one page
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.page_count > 1
    }

    /// Whether "Prev" is enabled
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether "Next" is enabled
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.page_count
    }

    /// Page reached by "Prev", never below 1
    #[must_use]
    pub fn prev(&self) -> usize {
        clamp_page(self.current.saturating_sub(1), self.page_count)
    }

    /// Page reached by "Next", never above the last page
    #[must_use]
    pub fn next(&self) -> usize {
        clamp_page(self.current.saturating_add(1), self.page_count)
    }

    /// Page numbers to render as buttons
    #[must_use]
    pub const fn pages(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }
}
