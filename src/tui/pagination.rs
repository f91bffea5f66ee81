//! Pagination bar rendering.
//!
//! Turns [`ListPaging`] state into a single styled line in one of three
//! layouts. Rendering never changes paging state.

use crate::pager::{condensed_pages, ListPaging, PageToken};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use serde::{Deserialize, Serialize};

/// Pagination display styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaginationStyle {
    /// Window: "‹ « 12 13 [14] 15 16 17 » ›"
    Window,
    /// Condensed: "‹ 1 … 13 [14] 15 … 20 ›"
    Condensed,
    /// Compact: "Page 14 of 20"
    Compact,
}

/// Styling configuration for pagination
#[derive(Debug, Clone)]
pub struct PaginationStyling {
    /// Style for current page
    pub current_page_style: Style,

    /// Style for other pages
    pub page_style: Style,

    /// Style for enabled arrows
    pub navigation_style: Style,

    /// Style for disabled arrows and gaps
    pub disabled_style: Style,

    /// Style for text elements
    pub text_style: Style,
}

impl Default for PaginationStyling {
    fn default() -> Self {
        Self {
            current_page_style: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            page_style: Style::default().fg(Color::Blue),
            navigation_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_style: Style::default().fg(Color::DarkGray),
            text_style: Style::default().fg(Color::White),
        }
    }
}

/// Renders the pagination controls below a list
#[derive(Debug, Clone, Default)]
pub struct PaginationBar {
    styling: PaginationStyling,
}

impl PaginationBar {
    /// Render pagination controls. Empty when there is at most one page.
    pub fn render(&self, paging: &ListPaging, style: PaginationStyle) -> Line<'static> {
        if paging.total_pages() <= 1 {
            return Line::default();
        }

        match style {
            PaginationStyle::Window => self.render_window_style(paging),
            PaginationStyle::Condensed => self.render_condensed_style(paging),
            PaginationStyle::Compact => self.render_compact_style(paging),
        }
    }

    fn render_window_style(&self, paging: &ListPaging) -> Line<'static> {
        let mut spans = vec![
            self.arrow("‹ ", paging.current_page() > 1),
            self.arrow("« ", paging.can_go_previous()),
        ];

        for page in paging.visible_pages() {
            spans.push(self.page_button(page, paging.current_page()));
        }

        spans.push(self.arrow("»", paging.can_go_next()));
        spans.push(self.arrow(" ›", paging.current_page() < paging.total_pages()));
        Line::from(spans)
    }

    fn render_condensed_style(&self, paging: &ListPaging) -> Line<'static> {
        let mut spans = vec![self.arrow("‹ ", paging.current_page() > 1)];

        for token in condensed_pages(paging.current_page(), paging.total_pages()) {
            match token {
                PageToken::Page(page) => spans.push(self.page_button(page, paging.current_page())),
                PageToken::Gap => spans.push(Span::styled("… ", self.styling.disabled_style)),
            }
        }

        spans.push(self.arrow("›", paging.current_page() < paging.total_pages()));
        Line::from(spans)
    }

    fn render_compact_style(&self, paging: &ListPaging) -> Line<'static> {
        Line::from(vec![Span::styled(
            format!("Page {} of {}", paging.current_page(), paging.total_pages()),
            self.styling.text_style,
        )])
    }

    fn page_button(&self, page: usize, current_page: usize) -> Span<'static> {
        if page == current_page {
            Span::styled(format!("[{}] ", page), self.styling.current_page_style)
        } else {
            Span::styled(format!("{} ", page), self.styling.page_style)
        }
    }

    fn arrow(&self, symbol: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            self.styling.navigation_style
        } else {
            self.styling.disabled_style
        };
        Span::styled(symbol, style)
    }
}
