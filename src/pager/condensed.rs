//! Condensed page list with gaps: `1 … 7 8 9 … 20`.

use serde::Serialize;

/// Lists up to this many pages are shown in full
pub const CONDENSED_THRESHOLD: usize = 7;

/// One slot in a condensed page list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageToken {
    /// A selectable page
    Page(usize),
    /// Elided pages; not selectable
    Gap,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Gap => None,
        }
    }
}

/// First and last page plus the neighbours of `current_page`, with gaps between.
pub fn condensed_pages(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }
    if total_pages <= CONDENSED_THRESHOLD {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut tokens = vec![PageToken::Page(1)];

    if current > 3 {
        tokens.push(PageToken::Gap);
    }

    let from = current.saturating_sub(1).max(2);
    let to = current.saturating_add(1).min(total_pages - 1);
    tokens.extend((from..=to).map(PageToken::Page));

    if current.saturating_add(2) < total_pages {
        tokens.push(PageToken::Gap);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Gap, Page};

    #[test]
    fn test_nothing_for_single_page() {
        assert!(condensed_pages(1, 0).is_empty());
        assert!(condensed_pages(1, 1).is_empty());
    }

    #[test]
    fn test_short_lists_shown_in_full() {
        assert_eq!(condensed_pages(3, 7), (1..=7).map(Page).collect::<Vec<_>>());
        assert_eq!(condensed_pages(1, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_gaps_around_middle_page() {
        assert_eq!(
            condensed_pages(10, 20),
            vec![Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]
        );
    }

    #[test]
    fn test_near_edges() {
        assert_eq!(
            condensed_pages(1, 20),
            vec![Page(1), Page(2), Gap, Page(20)]
        );
        assert_eq!(
            condensed_pages(3, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(20)]
        );
        assert_eq!(
            condensed_pages(18, 20),
            vec![Page(1), Gap, Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            condensed_pages(20, 20),
            vec![Page(1), Gap, Page(19), Page(20)]
        );
    }

    #[test]
    fn test_current_page_always_present() {
        for total in 2..=30 {
            for current in 1..=total {
                let tokens = condensed_pages(current, total);
                assert!(tokens.contains(&Page(current)), "total={total} current={current}");
                assert_eq!(tokens.first(), Some(&Page(1)));
                assert_eq!(tokens.last(), Some(&Page(total)));
            }
        }
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(condensed_pages(50, 20), condensed_pages(20, 20));
        assert_eq!(condensed_pages(0, 20), condensed_pages(1, 20));
    }
}
