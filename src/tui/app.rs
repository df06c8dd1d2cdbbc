// TUI application state
//
// Owns the status widget, the search form, and display preferences. Key
// handling is synchronous: actions that need a lookup return the
// `StatusQuery` for the event loop to execute.

use super::components::Toast;
use super::input::TextInput;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::i18n::{Locale, Strings};
use crate::logging::LogBuffer;
use crate::status::{StatusQuery, StatusReport, StatusWidget, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The username field: printable keys edit the text
    Form,
    /// The result panel: single-letter shortcuts are active
    Panel,
}

/// Something the event loop must do after a key press
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Lookup(StatusQuery),
    CopyMessage(String),
}

/// Main application state for the TUI
pub struct App {
    pub widget: StatusWidget,
    pub form: TextInput,
    pub focus: Focus,
    pub locale: Locale,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub show_logs: bool,
    pub toast: Option<Toast>,
    pub animation_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(widget: StatusWidget, config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            widget,
            form: TextInput::default(),
            focus: Focus::Panel,
            locale: config.locale,
            theme_kind: config.theme,
            theme: config.theme.theme(),
            log_buffer,
            show_logs: false,
            toast: None,
            animation_frame: 0,
            should_quit: false,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    /// Mount the widget and sync the form with the location
    ///
    /// The form gets focus when there is no identifier to look up.
    pub fn mount(&mut self) -> Option<StatusQuery> {
        let query = self.widget.mount();
        self.sync_form();
        query
    }

    fn sync_form(&mut self) {
        self.form
            .set(self.widget.identifier().unwrap_or_default().to_string());
        self.focus = if self.widget.identifier().is_none() {
            Focus::Form
        } else {
            Focus::Panel
        };
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Action::None;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Panel => self.handle_panel_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc | KeyCode::Tab => {
                self.focus = Focus::Panel;
                Action::None
            }
            _ => {
                self.form.handle_key(key);
                Action::None
            }
        }
    }

    fn handle_panel_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                Action::None
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.retry(),
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('i') => {
                self.focus = Focus::Form;
                Action::None
            }
            KeyCode::Char('l') => {
                self.locale = self.locale.toggle();
                tracing::debug!("Language switched to {}", self.locale.as_str());
                Action::None
            }
            KeyCode::Char('t') => {
                self.theme_kind = self.theme_kind.toggle();
                self.theme = self.theme_kind.theme();
                Action::None
            }
            KeyCode::Char('L') => {
                self.show_logs = !self.show_logs;
                Action::None
            }
            KeyCode::Char('y') => match self.widget.state() {
                ViewState::Resolved(StatusReport { message, .. }) => {
                    Action::CopyMessage(message.clone())
                }
                ViewState::Failed(err) => Action::CopyMessage(err.user_message(self.strings())),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Submit the form: rewrite the location and remount
    fn submit(&mut self) -> Action {
        match self.widget.submit(self.form.value()) {
            Some(query) => {
                self.sync_form();
                Action::Lookup(query)
            }
            None => Action::None,
        }
    }

    /// Retry the current identifier, or send the user to the form if there is none
    fn retry(&mut self) -> Action {
        if self.widget.state().is_loading() {
            return Action::None;
        }
        match self.widget.retry() {
            Some(query) => Action::Lookup(query),
            None => {
                self.focus = Focus::Form;
                Action::None
            }
        }
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance animations and expire the toast
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Spinner character for the loading block
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
