//! Non-interactive window calculation: `roster-pager pages --total 20 --current 15`

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::pager::{self, condensed_pages, PageToken, WindowDirection};

/// Print the page-button window for a page count
#[derive(Debug, Args)]
pub struct PagesCommand {
    /// Total number of pages
    #[arg(long)]
    pub total: usize,

    /// Current page (1-based)
    #[arg(long, default_value = "1")]
    pub current: usize,

    /// Window start before resyncing
    #[arg(long, default_value = "1")]
    pub start: usize,

    /// Shift the window after resyncing; may be repeated
    #[arg(long, value_enum)]
    pub advance: Vec<Step>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    Previous,
    Next,
}

impl From<Step> for WindowDirection {
    fn from(step: Step) -> Self {
        match step {
            Step::Previous => WindowDirection::Previous,
            Step::Next => WindowDirection::Next,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved window state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowSnapshot {
    pub total_pages: usize,
    pub current_page: usize,
    pub window_start: usize,
    pub visible_pages: Vec<usize>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub condensed: Vec<PageToken>,
}

impl PagesCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        if self.total > 0 && !(1..=self.total).contains(&self.current) {
            warn!(
                "Current page {} is outside 1..={}, clamping",
                self.current, self.total
            );
        }

        let snapshot = snapshot(
            self.current,
            self.total,
            self.start,
            &self.advance,
            config.window_size,
        );
        debug!(?snapshot, "Window resolved");

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            OutputFormat::Text => println!("{}", render_text(&snapshot)),
        }
        Ok(())
    }
}

/// Resync the window on `current`, then apply the enabled window shifts in order
pub fn snapshot(
    current: usize,
    total_pages: usize,
    start: usize,
    steps: &[Step],
    window_size: usize,
) -> WindowSnapshot {
    let current_page = current.clamp(1, total_pages.max(1));
    let mut window_start = pager::resync(current_page, total_pages, start, window_size);

    for step in steps {
        let enabled = match step {
            Step::Previous => pager::can_go_previous(window_start),
            Step::Next => pager::can_go_next(window_start, total_pages, window_size),
        };
        if enabled {
            window_start = pager::advance_window((*step).into(), window_start, total_pages, window_size);
        } else {
            debug!(?step, window_start, "Window shift disabled");
        }
    }

    WindowSnapshot {
        total_pages,
        current_page,
        window_start,
        visible_pages: pager::visible_pages(window_start, total_pages, window_size).collect(),
        can_go_previous: pager::can_go_previous(window_start),
        can_go_next: pager::can_go_next(window_start, total_pages, window_size),
        condensed: condensed_pages(current_page, total_pages),
    }
}

pub fn render_text(snapshot: &WindowSnapshot) -> String {
    if snapshot.visible_pages.is_empty() {
        return "(no pagination)".to_string();
    }

    let pages: Vec<String> = snapshot
        .visible_pages
        .iter()
        .map(|page| {
            if *page == snapshot.current_page {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();

    let condensed: Vec<String> = snapshot
        .condensed
        .iter()
        .map(|token| match token.page() {
            Some(page) => page.to_string(),
            None => "…".to_string(),
        })
        .collect();

    format!(
        "{} {} {}\ncondensed: {}",
        if snapshot.can_go_previous { "«" } else { " " },
        pages.join(" "),
        if snapshot.can_go_next { "»" } else { " " },
        condensed.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::WINDOW_SIZE;

    #[test]
    fn test_snapshot_recenters() {
        let snap = snapshot(15, 20, 1, &[], WINDOW_SIZE);
        assert_eq!(snap.window_start, 12);
        assert_eq!(snap.visible_pages, (12..=17).collect::<Vec<_>>());
        assert!(snap.can_go_previous);
        assert!(snap.can_go_next);
    }

    #[test]
    fn test_snapshot_applies_steps() {
        let snap = snapshot(15, 20, 1, &[Step::Next, Step::Next], WINDOW_SIZE);
        assert_eq!(snap.window_start, 15);
        assert_eq!(snap.visible_pages, (15..=20).collect::<Vec<_>>());
        assert!(!snap.can_go_next);

        let snap = snapshot(1, 20, 1, &[Step::Previous], WINDOW_SIZE);
        assert_eq!(snap.window_start, 1);
    }

    #[test]
    fn test_snapshot_small_total() {
        let snap = snapshot(3, 5, 1, &[Step::Next], WINDOW_SIZE);
        assert_eq!(snap.visible_pages, vec![1, 2, 3, 4, 5]);
        assert!(!snap.can_go_previous);
        assert!(!snap.can_go_next);
    }

    #[test]
    fn test_snapshot_huge_arguments() {
        let snap = snapshot(5, 20, usize::MAX, &[Step::Next], WINDOW_SIZE);
        assert_eq!(snap.window_start, 8);
        assert_eq!(snap.visible_pages, (8..=13).collect::<Vec<_>>());

        let snap = snapshot(usize::MAX, usize::MAX, 1, &[Step::Next], WINDOW_SIZE);
        assert_eq!(snap.current_page, usize::MAX);
        assert_eq!(snap.window_start, usize::MAX - WINDOW_SIZE / 2);
        assert!(!snap.can_go_next);
        assert_eq!(snap.condensed.last(), Some(&PageToken::Page(usize::MAX)));
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&snapshot(15, 20, 1, &[], WINDOW_SIZE));
        assert_eq!(text, "« 12 13 14 [15] 16 17 »\ncondensed: 1 … 14 15 16 … 20");

        assert_eq!(render_text(&snapshot(1, 1, 1, &[], WINDOW_SIZE)), "(no pagination)");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(snapshot(2, 8, 1, &[], WINDOW_SIZE)).unwrap();
        assert_eq!(json["window_start"], 1);
        assert_eq!(json["visible_pages"], serde_json::json!([1, 2, 3, 4, 5, 6]));
        assert_eq!(json["condensed"][0], serde_json::json!({ "page": 1 }));
        assert_eq!(json["condensed"][3], serde_json::json!("gap"));
    }
}
