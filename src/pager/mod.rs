//! Page-button state for paged lists.
//!
//! [`WindowedPager`] keeps a sliding window of page buttons over the total
//! page count; [`ListPaging`] is the list-view side that owns the current
//! page and keeps the window in sync; [`condensed_pages`] is the alternative
//! `1 … 4 5 6 … 20` layout.

pub mod condensed;
pub mod paging;
pub mod window;

pub use condensed::*;
pub use paging::*;
pub use window::*;
