//! Windowed page-button controller.
//!
//! Maps a total page count and an externally owned current page onto a
//! bounded, contiguous window of page buttons. The window follows the
//! current page when it moves out of view and can also be shifted by whole
//! blocks without touching the current page.

use std::ops::RangeInclusive;
use tracing::debug;

/// Number of page buttons visible at once
pub const WINDOW_SIZE: usize = 6;

/// Direction for shifting the window by a whole block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDirection {
    /// Towards page 1
    Previous,
    /// Towards the last page
    Next,
}

/// Recentre `window_start` on `current_page` if the page lies outside the window.
///
/// Out-of-range pages are clamped into `[1, total_pages]` first. When every
/// page fits in a single window the window starts at 1.
pub fn resync(
    current_page: usize,
    total_pages: usize,
    window_start: usize,
    window_size: usize,
) -> usize {
    let window_size = window_size.max(1);
    let window_start = window_start.max(1);

    if total_pages == 0 {
        return window_start;
    }
    if total_pages <= window_size {
        return 1;
    }

    let current_page = current_page.clamp(1, total_pages);
    let window_end = window_start.saturating_add(window_size - 1);

    if current_page < window_start || current_page > window_end {
        current_page.saturating_sub(window_size / 2).max(1)
    } else {
        window_start
    }
}

/// Page numbers shown for a window, clipped to `total_pages`.
///
/// Empty when there is at most one page.
pub fn visible_pages(
    window_start: usize,
    total_pages: usize,
    window_size: usize,
) -> RangeInclusive<usize> {
    if total_pages <= 1 {
        return empty_window();
    }

    let start = window_start.max(1);
    let end = start.saturating_add(window_size.max(1) - 1).min(total_pages);
    start..=end
}

/// Window start after shifting one block in `direction`.
///
/// This is the raw transition; callers decide whether the button was enabled.
pub fn advance_window(
    direction: WindowDirection,
    window_start: usize,
    total_pages: usize,
    window_size: usize,
) -> usize {
    let window_size = window_size.max(1);

    match direction {
        WindowDirection::Previous => window_start.saturating_sub(window_size).max(1),
        WindowDirection::Next => {
            let last_full_start = total_pages.saturating_sub(window_size - 1);
            last_full_start.min(window_start.saturating_add(window_size)).max(1)
        }
    }
}

pub fn can_go_previous(window_start: usize) -> bool {
    window_start > 1
}

pub fn can_go_next(window_start: usize, total_pages: usize, window_size: usize) -> bool {
    window_start.max(1).saturating_add(window_size.max(1) - 1) < total_pages
}

#[allow(clippy::reversed_empty_ranges)]
fn empty_window() -> RangeInclusive<usize> {
    1..=0
}

/// Sliding window of page buttons.
///
/// The pager never owns the current page. Its single piece of state is the
/// first page of the window, which the owner keeps in sync by calling
/// [`WindowedPager::resync`] after every page or total change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedPager {
    window_start: usize,
    window_size: usize,
}

impl WindowedPager {
    /// Create a pager with the standard window of six buttons
    pub fn new() -> Self {
        Self::with_window_size(WINDOW_SIZE)
    }

    /// Create a pager with a custom window size (at least 1)
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window_start: 1,
            window_size: window_size.max(1),
        }
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Bring `current_page` back into view. Returns the new window start.
    pub fn resync(&mut self, current_page: usize, total_pages: usize) -> usize {
        let new_start = resync(current_page, total_pages, self.window_start, self.window_size);
        if new_start != self.window_start {
            debug!(
                current_page,
                total_pages,
                old_start = self.window_start,
                new_start,
                "Window resynced"
            );
            self.window_start = new_start;
        }
        self.window_start
    }

    /// Page buttons to render for `total_pages`
    pub fn visible_pages(&self, total_pages: usize) -> RangeInclusive<usize> {
        visible_pages(self.window_start, total_pages, self.window_size)
    }

    pub fn can_go_previous(&self) -> bool {
        can_go_previous(self.window_start)
    }

    pub fn can_go_next(&self, total_pages: usize) -> bool {
        can_go_next(self.window_start, total_pages, self.window_size)
    }

    /// Shift the window one block. Disabled directions are a no-op and return false.
    pub fn advance(&mut self, direction: WindowDirection, total_pages: usize) -> bool {
        let enabled = match direction {
            WindowDirection::Previous => self.can_go_previous(),
            WindowDirection::Next => self.can_go_next(total_pages),
        };
        if !enabled {
            return false;
        }

        let new_start = advance_window(direction, self.window_start, total_pages, self.window_size);
        debug!(?direction, old_start = self.window_start, new_start, "Window shifted");
        let moved = new_start != self.window_start;
        self.window_start = new_start;
        moved
    }

    /// A page button was tapped. The owner decides what to do with the page.
    pub fn on_page_selected(&self, page: usize) -> usize {
        page
    }
}

impl Default for WindowedPager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(range: RangeInclusive<usize>) -> Vec<usize> {
        range.collect()
    }

    #[test]
    fn test_single_page_renders_nothing() {
        for start in 1..10 {
            assert!(visible_pages(start, 0, WINDOW_SIZE).is_empty());
            assert!(visible_pages(start, 1, WINDOW_SIZE).is_empty());
        }
    }

    #[test]
    fn test_first_window_of_twenty() {
        let mut pager = WindowedPager::new();
        pager.resync(1, 20);
        assert_eq!(pager.window_start(), 1);
        assert_eq!(pages(pager.visible_pages(20)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_resync_recenters_on_far_page() {
        assert_eq!(resync(15, 20, 1, WINDOW_SIZE), 12);

        let mut pager = WindowedPager::new();
        pager.resync(15, 20);
        assert_eq!(pages(pager.visible_pages(20)), (12..=17).collect::<Vec<_>>());
    }

    #[test]
    fn test_resync_keeps_window_when_page_visible() {
        assert_eq!(resync(4, 20, 1, WINDOW_SIZE), 1);
        assert_eq!(resync(6, 20, 1, WINDOW_SIZE), 1);
        assert_eq!(resync(12, 20, 12, WINDOW_SIZE), 12);
        assert_eq!(resync(7, 20, 1, WINDOW_SIZE), 4);
    }

    #[test]
    fn test_resync_recenters_backwards() {
        assert_eq!(resync(2, 20, 12, WINDOW_SIZE), 1);
        assert_eq!(resync(10, 20, 12, WINDOW_SIZE), 7);
    }

    #[test]
    fn test_small_total_shows_everything() {
        let mut pager = WindowedPager::new();
        for current in 1..=5 {
            pager.resync(current, 5);
            assert_eq!(pages(pager.visible_pages(5)), vec![1, 2, 3, 4, 5]);
            assert!(!pager.can_go_previous());
            assert!(!pager.can_go_next(5));
        }
    }

    #[test]
    fn test_next_block_clamps_to_last_full_window() {
        assert_eq!(advance_window(WindowDirection::Next, 12, 20, WINDOW_SIZE), 15);

        let mut pager = WindowedPager::new();
        pager.resync(15, 20);
        assert!(pager.advance(WindowDirection::Next, 20));
        assert_eq!(pager.window_start(), 15);
        assert_eq!(pages(pager.visible_pages(20)), (15..=20).collect::<Vec<_>>());
        assert!(!pager.can_go_next(20));
    }

    #[test]
    fn test_next_block_with_few_pages_never_below_one() {
        for total in 0..WINDOW_SIZE {
            assert_eq!(advance_window(WindowDirection::Next, 1, total, WINDOW_SIZE), 1);
        }
    }

    #[test]
    fn test_disabled_navigation_is_noop() {
        let mut pager = WindowedPager::new();
        assert!(!pager.advance(WindowDirection::Previous, 20));
        assert_eq!(pager.window_start(), 1);

        assert!(!pager.advance(WindowDirection::Next, 6));
        assert_eq!(pager.window_start(), 1);

        assert!(pager.advance(WindowDirection::Next, 7));
        assert_eq!(pager.window_start(), 2);
        assert!(pager.advance(WindowDirection::Previous, 7));
        assert_eq!(pager.window_start(), 1);
    }

    #[test]
    fn test_window_navigation_leaves_current_page_alone() {
        let mut pager = WindowedPager::new();
        pager.resync(3, 30);
        pager.advance(WindowDirection::Next, 30);
        assert_eq!(pager.window_start(), 7);
        assert!(!pager.visible_pages(30).contains(&3));

        // The owner resyncs only when its page changes.
        pager.resync(3, 30);
        assert!(pager.visible_pages(30).contains(&3));
    }

    #[test]
    fn test_page_selection_is_pass_through() {
        let pager = WindowedPager::new();
        assert_eq!(pager.on_page_selected(9), 9);
    }

    #[test]
    fn test_out_of_contract_inputs_are_clamped() {
        assert_eq!(resync(0, 20, 0, WINDOW_SIZE), 1);
        assert_eq!(resync(99, 20, 1, WINDOW_SIZE), 17);
        assert_eq!(resync(3, 0, 4, WINDOW_SIZE), 4);
        assert_eq!(pages(visible_pages(0, 20, WINDOW_SIZE)), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(pages(WindowedPager::with_window_size(0).visible_pages(20)), vec![1]);
    }

    #[test]
    fn test_huge_inputs_saturate() {
        let max = usize::MAX;

        assert_eq!(resync(5, 20, max, WINDOW_SIZE), 2);
        assert_eq!(resync(max, max, 1, WINDOW_SIZE), max - WINDOW_SIZE / 2);
        assert_eq!(resync(max - 1, max, max - 3, WINDOW_SIZE), max - 3);

        assert_eq!(pages(visible_pages(max, 20, WINDOW_SIZE)), Vec::<usize>::new());
        assert_eq!(pages(visible_pages(max - 1, max, WINDOW_SIZE)), vec![max - 1, max]);

        assert_eq!(advance_window(WindowDirection::Next, 1, max, WINDOW_SIZE), 1 + WINDOW_SIZE);
        assert_eq!(
            advance_window(WindowDirection::Next, max - 2, max, WINDOW_SIZE),
            max - WINDOW_SIZE + 1
        );
        assert_eq!(advance_window(WindowDirection::Previous, max, max, WINDOW_SIZE), max - WINDOW_SIZE);

        assert!(!can_go_next(max, 20, WINDOW_SIZE));
        assert!(!can_go_next(max - 2, max, WINDOW_SIZE));
        assert!(can_go_next(1, max, WINDOW_SIZE));
        assert!(can_go_previous(max));
    }

    #[test]
    fn test_resync_always_contains_current_page() {
        for total in 1..=40 {
            for start in 1..=total + WINDOW_SIZE {
                for current in 1..=total {
                    let new_start = resync(current, total, start, WINDOW_SIZE);
                    let end = (new_start + WINDOW_SIZE - 1).min(total);
                    assert!(
                        new_start <= current && current <= end,
                        "total={total} start={start} current={current} -> {new_start}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resync_is_idempotent() {
        for total in 0..=40 {
            for start in 1..=total + WINDOW_SIZE {
                for current in 1..=total.max(1) {
                    let once = resync(current, total, start, WINDOW_SIZE);
                    assert_eq!(resync(current, total, once, WINDOW_SIZE), once);
                }
            }
        }
    }

    #[test]
    fn test_advance_bounds() {
        for total in 1..=40 {
            for start in 1..=total {
                let next = advance_window(WindowDirection::Next, start, total, WINDOW_SIZE);
                assert!(next >= 1);
                assert!(next + WINDOW_SIZE - 1 <= total + WINDOW_SIZE - 1);

                let previous = advance_window(WindowDirection::Previous, start, total, WINDOW_SIZE);
                assert!(previous >= 1);
                assert!(previous <= start);
            }
        }
    }

    #[test]
    fn test_custom_window_size() {
        let mut pager = WindowedPager::with_window_size(3);
        pager.resync(10, 12);
        assert_eq!(pager.window_start(), 9);
        assert_eq!(pages(pager.visible_pages(12)), vec![9, 10, 11]);
        assert!(pager.advance(WindowDirection::Next, 12));
        assert_eq!(pages(pager.visible_pages(12)), vec![10, 11, 12]);
    }
}
