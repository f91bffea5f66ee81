use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pager::WINDOW_SIZE;

/// Digit keys can reach at most this many page buttons
const MAX_DIGIT_BUTTONS: usize = 9;

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: Vec<(KeyCode, KeyModifiers)>,
    pub label: &'static str,
    pub description: &'static str,
}

impl KeyBinding {
    pub fn new(keys: &[(KeyCode, KeyModifiers)], label: &'static str, description: &'static str) -> Self {
        Self {
            keys: keys.to_vec(),
            label,
            description,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|(code, modifiers)| *code == event.code && *modifiers == event.modifiers)
    }
}

/// What a key press asks the list to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    PreviousWindow,
    NextWindow,
    /// Select the n-th visible page button (1-based)
    SelectButton(usize),
    StartSearch,
    ClearSearch,
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(Action, KeyBinding)>,
    /// Digits 1..=page_buttons select a visible page button
    page_buttons: usize,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::with_page_buttons(WINDOW_SIZE)
    }
}

impl KeyMap {
    /// Key map for a pagination bar showing `page_buttons` page buttons
    pub fn with_page_buttons(page_buttons: usize) -> Self {
        let none = KeyModifiers::NONE;
        Self {
            page_buttons: page_buttons.clamp(1, MAX_DIGIT_BUTTONS),
            bindings: vec![
                (
                    Action::Quit,
                    KeyBinding::new(
                        &[(KeyCode::Char('c'), KeyModifiers::CONTROL), (KeyCode::Char('q'), none)],
                        "q",
                        "quit",
                    ),
                ),
                (
                    Action::PreviousPage,
                    KeyBinding::new(&[(KeyCode::Left, none), (KeyCode::Char('h'), none)], "←", "previous page"),
                ),
                (
                    Action::NextPage,
                    KeyBinding::new(&[(KeyCode::Right, none), (KeyCode::Char('l'), none)], "→", "next page"),
                ),
                (
                    Action::FirstPage,
                    KeyBinding::new(&[(KeyCode::Home, none)], "Home", "first page"),
                ),
                (
                    Action::LastPage,
                    KeyBinding::new(&[(KeyCode::End, none)], "End", "last page"),
                ),
                (
                    Action::PreviousWindow,
                    KeyBinding::new(&[(KeyCode::Char('['), none)], "[", "previous pages"),
                ),
                (
                    Action::NextWindow,
                    KeyBinding::new(&[(KeyCode::Char(']'), none)], "]", "more pages"),
                ),
                (
                    Action::StartSearch,
                    KeyBinding::new(&[(KeyCode::Char('/'), none)], "/", "search"),
                ),
                (
                    Action::ClearSearch,
                    KeyBinding::new(&[(KeyCode::Esc, none)], "Esc", "clear search"),
                ),
            ],
        }
    }

    /// Map a key press in list mode to an action
    pub fn action(&self, event: &KeyEvent) -> Option<Action> {
        if let KeyCode::Char(c) = event.code {
            if event.modifiers == KeyModifiers::NONE {
                if let Some(n) = c.to_digit(10).map(|n| n as usize) {
                    return (1..=self.page_buttons)
                        .contains(&n)
                        .then_some(Action::SelectButton(n));
                }
            }
        }

        self.bindings
            .iter()
            .find(|(_, binding)| binding.matches(event))
            .map(|(action, _)| *action)
    }

    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL
    }

    /// One-line help for the footer
    pub fn help_text(&self) -> String {
        let mut parts: Vec<String> = self
            .bindings
            .iter()
            .map(|(_, binding)| format!("{} {}", binding.label, binding.description))
            .collect();
        let digits = match self.page_buttons {
            1 => "1".to_string(),
            n => format!("1-{n}"),
        };
        parts.insert(1, format!("{digits} pick page"));
        parts.join(" · ")
    }
}
