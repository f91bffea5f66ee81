use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::debug;

use super::events::Event;
use super::keys::{Action, KeyMap};
use super::pagination::{PaginationBar, PaginationStyle};
use super::Frame;
use crate::config::Config;
use crate::pager::{ListPaging, WindowDirection};
use crate::roster::{Roster, RosterPage, Student};

/// Interactive roster list
pub struct App {
    roster: Roster,
    paging: ListPaging,
    page: RosterPage,
    min_query_len: usize,
    display_style: PaginationStyle,
    search_mode: bool,
    search_input: String,
    keymap: KeyMap,
    bar: PaginationBar,
    status: Option<String>,
}

impl App {
    pub fn new(config: &Config, roster: Roster) -> Self {
        let mut paging = ListPaging::with_options(
            config.items_per_page,
            config.window_size,
            config.min_query_len,
        );
        paging.add_callback(|event| debug!(?event, "Paging event"));

        let mut app = Self {
            roster,
            paging,
            page: RosterPage::default(),
            min_query_len: config.min_query_len,
            display_style: config.display_style,
            search_mode: false,
            search_input: String::new(),
            keymap: KeyMap::with_page_buttons(config.window_size),
            bar: PaginationBar::default(),
            status: None,
        };
        app.refresh();
        app
    }

    #[cfg(test)]
    pub fn paging(&self) -> &ListPaging {
        &self.paging
    }

    #[cfg(test)]
    pub fn page(&self) -> &RosterPage {
        &self.page
    }

    /// Re-fetch the current page and report the new total to the paging state
    fn refresh(&mut self) {
        let page = self.fetch();
        let requested = self.paging.current_page();
        self.paging.set_total_items(page.total);

        // The list shrank under us; the paging state moved back.
        self.page = if self.paging.current_page() != requested {
            self.fetch()
        } else {
            page
        };
        debug!(
            page = self.paging.current_page(),
            shown = self.page.students.len(),
            total = self.page.total,
            "Roster page loaded"
        );
    }

    fn fetch(&self) -> RosterPage {
        self.roster.fetch_page(
            self.paging.query(),
            self.paging.current_page(),
            self.paging.items_per_page(),
            self.min_query_len,
        )
    }

    /// Handle an event. Returns true when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => Ok(self.handle_key_event(key)),
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                Ok(false)
            }
            Event::StatusMessage(message) => {
                self.status = Some(message);
                Ok(false)
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Ok(false)
            }
            Event::Tick => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if self.keymap.should_quit(&key) {
            return true;
        }
        if self.search_mode {
            self.handle_search_key(key);
            return false;
        }

        let Some(action) = self.keymap.action(&key) else {
            return false;
        };
        self.status = None;

        let changed = match action {
            Action::Quit => return true,
            Action::PreviousPage => self.paging.previous_page(),
            Action::NextPage => self.paging.next_page(),
            Action::FirstPage => self.paging.first_page(),
            Action::LastPage => self.paging.last_page(),
            Action::PreviousWindow => {
                self.paging.advance_window(WindowDirection::Previous);
                false
            }
            Action::NextWindow => {
                self.paging.advance_window(WindowDirection::Next);
                false
            }
            Action::SelectButton(n) => match self.paging.visible_pages().nth(n - 1) {
                Some(page) => self.paging.select_visible(page),
                None => false,
            },
            Action::StartSearch => {
                self.search_mode = true;
                false
            }
            Action::ClearSearch => {
                self.search_input.clear();
                self.paging.set_query("")
            }
        };

        if changed {
            self.refresh();
        }
        false
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.search_mode = false;
                return;
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_input.push(c);
            }
            _ => return,
        }

        if self.paging.set_query(self.search_input.clone()) {
            self.refresh();
        }
    }

    fn handle_mouse_event(&mut self, event: MouseEvent) {
        let changed = match event.kind {
            MouseEventKind::ScrollUp => self.paging.previous_page(),
            MouseEventKind::ScrollDown => self.paging.next_page(),
            _ => false,
        };
        if changed {
            self.refresh();
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.size());

        self.render_header(frame, chunks[0]);
        self.render_search(frame, chunks[1]);
        self.render_list(frame, chunks[2]);

        let bar = Paragraph::new(self.bar.render(&self.paging, self.display_style))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(bar, chunks[3]);

        let footer = self
            .status
            .clone()
            .unwrap_or_else(|| self.keymap.help_text());
        frame.render_widget(
            Paragraph::new(Span::styled(footer, Style::default().fg(Color::DarkGray))),
            chunks[4],
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut summary = Line::from(vec![
            Span::styled(
                format!("{} students", self.page.total),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  |  {} active on this page", self.page.active_count())),
            Span::raw(format!(
                "  |  page {} of {}",
                self.paging.current_page(),
                self.paging.total_pages().max(1)
            )),
        ]);
        if self.paging.is_search_active() {
            summary.spans.push(Span::styled(
                format!("  |  matching \"{}\"", self.paging.query().trim()),
                Style::default().fg(Color::Cyan),
            ));
        }
        let header = Paragraph::new(summary)
            .block(Block::default().borders(Borders::ALL).title("Roster"));
        frame.render_widget(header, area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.search_input.is_empty() && !self.search_mode {
            (
                "Search by name or ID (/)".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.search_mode {
            (format!("{}_", self.search_input), Style::default().fg(Color::White))
        } else {
            (self.search_input.clone(), Style::default().fg(Color::White))
        };

        let border = if self.search_mode {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let search = Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Search"),
        );
        frame.render_widget(search, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Students");

        if self.page.students.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No students found",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let offset = self.paging.offset();
        let items: Vec<ListItem> = self
            .page
            .students
            .iter()
            .enumerate()
            .map(|(i, student)| student_row(offset + i + 1, student))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn student_row(number: usize, student: &Student) -> ListItem<'static> {
    let (status, status_style) = if student.is_active {
        ("active", Style::default().fg(Color::Green))
    } else {
        ("inactive", Style::default().fg(Color::Red))
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{:>4}  ", number), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:<28}", student.name)),
        Span::styled(format!("{:<14}", student.vat), Style::default().fg(Color::Gray)),
        Span::styled(status, status_style),
    ]))
}
