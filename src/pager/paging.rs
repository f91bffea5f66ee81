//! List-view paging state: the owner of the current page.
//!
//! `ListPaging` holds the page the list is showing, the item count it was
//! told about, and the active search text. Every mutation that can move the
//! current page resyncs the owned [`WindowedPager`] before returning, so the
//! page buttons always include the current page.

use super::window::{WindowDirection, WindowedPager, WINDOW_SIZE};
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Default number of records per page
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Default minimum query length before a search filters the list
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Paging events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagingEvent {
    /// Current page changed
    PageChanged { old_page: usize, new_page: usize },

    /// Window of page buttons moved without changing the page
    WindowShifted { old_start: usize, new_start: usize },

    /// Item count changed
    TotalChanged {
        total_items: usize,
        total_pages: usize,
    },

    /// Search text changed; the list restarted at page 1
    QueryChanged { query: String },
}

type Callback = Box<dyn Fn(PagingEvent) + Send + Sync>;

/// Paging state owned by a list view
pub struct ListPaging {
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
    query: String,
    min_query_len: usize,
    pager: WindowedPager,
    callbacks: Vec<Callback>,
}

impl std::fmt::Debug for ListPaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPaging")
            .field("current_page", &self.current_page)
            .field("total_items", &self.total_items)
            .field("items_per_page", &self.items_per_page)
            .field("query", &self.query)
            .field("min_query_len", &self.min_query_len)
            .field("pager", &self.pager)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl ListPaging {
    pub fn new() -> Self {
        Self::with_options(DEFAULT_ITEMS_PER_PAGE, WINDOW_SIZE, DEFAULT_MIN_QUERY_LEN)
    }

    /// Create paging state with explicit sizes. Zero sizes are raised to 1.
    pub fn with_options(items_per_page: usize, window_size: usize, min_query_len: usize) -> Self {
        Self {
            current_page: 1,
            total_items: 0,
            items_per_page: items_per_page.max(1),
            query: String::new(),
            min_query_len,
            pager: WindowedPager::with_window_size(window_size),
            callbacks: Vec::new(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of pages; 0 for an empty list
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Index of the first item on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// Whether the query is long enough to filter the list
    pub fn is_search_active(&self) -> bool {
        self.query.trim().chars().count() >= self.min_query_len
    }

    /// Add an event callback
    pub fn add_callback<F>(&mut self, callback: F)
    where
        F: Fn(PagingEvent) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Go to a specific page.
    ///
    /// Returns false without changing anything when the page is out of range
    /// or already current.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return false;
        }

        let old_page = self.current_page;
        self.current_page = page;
        self.resync();
        debug!(old_page, new_page = page, "Page changed");
        self.emit_event(PagingEvent::PageChanged {
            old_page,
            new_page: page,
        });
        true
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// A page button was tapped
    pub fn select_visible(&mut self, page: usize) -> bool {
        let page = self.pager.on_page_selected(page);
        self.go_to_page(page)
    }

    /// Record a new item count, pulling the current page back if the list shrank.
    /// An empty list sits on page 1.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;

        let total_pages = self.total_pages();
        let last_page = total_pages.max(1);
        if self.current_page > last_page {
            warn!(
                current_page = self.current_page,
                total_pages, "Current page past the end of the list, clamping"
            );
            self.current_page = last_page;
        }

        self.resync();
        self.emit_event(PagingEvent::TotalChanged {
            total_items,
            total_pages,
        });
    }

    /// Replace the search text. A changed query always restarts at page 1.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }

        self.query = query;
        self.current_page = 1;
        self.resync();
        debug!(query = %self.query, "Query changed");
        self.emit_event(PagingEvent::QueryChanged {
            query: self.query.clone(),
        });
        true
    }

    /// Shift the page buttons one block
    pub fn advance_window(&mut self, direction: WindowDirection) -> bool {
        let old_start = self.pager.window_start();
        if !self.pager.advance(direction, self.total_pages()) {
            return false;
        }

        self.emit_event(PagingEvent::WindowShifted {
            old_start,
            new_start: self.pager.window_start(),
        });
        true
    }

    pub fn window_start(&self) -> usize {
        self.pager.window_start()
    }

    pub fn visible_pages(&self) -> RangeInclusive<usize> {
        self.pager.visible_pages(self.total_pages())
    }

    pub fn can_go_previous(&self) -> bool {
        self.pager.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.pager.can_go_next(self.total_pages())
    }

    fn resync(&mut self) {
        let total_pages = self.total_pages();
        self.pager.resync(self.current_page, total_pages);
    }

    fn emit_event(&self, event: PagingEvent) {
        for callback in &self.callbacks {
            callback(event.clone());
        }
    }
}

impl Default for ListPaging {
    fn default() -> Self {
        Self::new()
    }
}
