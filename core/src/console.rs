//! The Input Controller
//!
//! [`Console`] owns the line buffer, the recall state machine, the
//! scrollback and submitted-command logs, and the config lifecycle state.
//! It consumes [`InputEvent`]s from a surface and dispatches normalized
//! command tokens to the formatters; surfaces only redraw what it holds.
//!
//! # Design Philosophy
//!
//! Key-event branching is an explicit state machine, not index arithmetic
//! scattered across handlers: recall is either `Editing` (fresh line) or
//! `Recalling(index)` into the command log, and every transition is a
//! method here, testable without any rendering surface.

use crate::command::{self, Command};
use crate::config::{Config, ConfigError};
use crate::events::InputEvent;
use crate::format::{self, FormatStyle};
use crate::history::{CommandLog, EntryKind, HistoryStore};
use crate::text::{Span, StyledLine, StyledText};

/// Where Up/Down recall currently stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecallState {
    /// Editing a fresh line; Up jumps to the newest logged command
    Editing,
    /// Recalling the logged command at this index
    Recalling(usize),
}

/// Lifecycle of the one-time config load
#[derive(Debug)]
pub enum ConfigState {
    /// The load has not resolved yet; dispatch answers the not-ready notice
    Loading,
    /// The load succeeded; dispatch formats from this document
    Ready(Config),
    /// The load failed; terminal for the session, no retry
    Failed,
}

/// The portfolio terminal's input controller and command dispatcher
#[derive(Debug)]
pub struct Console {
    buffer: String,
    history: HistoryStore,
    commands: CommandLog,
    recall: RecallState,
    config: ConfigState,
    style: FormatStyle,
}

impl Console {
    /// Create a console awaiting its config load
    #[must_use]
    pub fn new(style: FormatStyle) -> Self {
        Self {
            buffer: String::new(),
            history: HistoryStore::new(),
            commands: CommandLog::new(),
            recall: RecallState::Editing,
            config: ConfigState::Loading,
            style,
        }
    }

    /// The line currently being edited
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The scrollback
    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The submitted-command log
    #[must_use]
    pub fn command_log(&self) -> &CommandLog {
        &self.commands
    }

    /// Current recall state
    #[must_use]
    pub fn recall_state(&self) -> RecallState {
        self.recall
    }

    /// Whether the config load has succeeded
    #[must_use]
    pub fn config_ready(&self) -> bool {
        matches!(self.config, ConfigState::Ready(_))
    }

    /// The prompt for the input line
    #[must_use]
    pub fn prompt(&self) -> String {
        match &self.config {
            ConfigState::Ready(cfg) => format::prompt(Some(&cfg.personal)),
            _ => format::prompt(None),
        }
    }

    /// Resolve the one-time config load
    ///
    /// Success shows the startup banner; failure records a single error
    /// entry and leaves the session usable, with every later dispatch
    /// answering the not-ready notice.
    pub fn resolve_config(&mut self, result: Result<Config, ConfigError>) {
        match result {
            Ok(config) => {
                self.history
                    .push(EntryKind::Banner, format::banner(&config.personal));
                self.config = ConfigState::Ready(config);
            }
            Err(error) => {
                tracing::warn!(%error, "Portfolio config load failed");
                self.history
                    .push(EntryKind::Output, StyledText::plain(format::LOAD_ERROR));
                self.config = ConfigState::Failed;
            }
        }
    }

    /// Consume one key event from the surface
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Char(c) => self.buffer.push(c),
            InputEvent::Backspace => {
                self.buffer.pop();
            }
            InputEvent::Submit => self.submit(),
            InputEvent::HistoryPrev => self.recall_prev(),
            InputEvent::HistoryNext => self.recall_next(),
            InputEvent::Complete => self.complete(),
        }
    }

    /// Submit the current line
    fn submit(&mut self) {
        let raw = std::mem::take(&mut self.buffer);
        let token = command::normalize(&raw);
        if token.is_empty() {
            return;
        }

        self.echo_command_line(&raw);
        self.commands.push(raw);
        self.recall = RecallState::Editing;
        self.dispatch(&token);
    }

    /// Up: step toward older commands, clamped at the oldest
    fn recall_prev(&mut self) {
        let Some(newest) = self.commands.newest_index() else {
            return;
        };
        let index = match self.recall {
            RecallState::Editing => newest,
            RecallState::Recalling(i) => i.saturating_sub(1),
        };
        self.recall = RecallState::Recalling(index);
        if let Some(text) = self.commands.get(index) {
            self.buffer = text.to_string();
        }
    }

    /// Down: step toward newer commands; past the newest returns to editing
    fn recall_next(&mut self) {
        let RecallState::Recalling(index) = self.recall else {
            return;
        };
        let next = index + 1;
        if next >= self.commands.len() {
            self.recall = RecallState::Editing;
            self.buffer.clear();
        } else {
            self.recall = RecallState::Recalling(next);
            if let Some(text) = self.commands.get(next) {
                self.buffer = text.to_string();
            }
        }
    }

    /// Tab: complete a unique prefix, or list the candidates
    fn complete(&mut self) {
        if self.buffer.trim().is_empty() {
            return;
        }

        let matches = command::complete(&self.buffer);
        match matches.len() {
            0 => {}
            1 => {
                self.buffer = matches[0].to_string();
            }
            _ => {
                let attempted = self.buffer.clone();
                self.echo_command_line(&attempted);
                self.history
                    .push(EntryKind::Output, StyledText::plain(matches.join("  ")));
            }
        }
    }

    /// Append a Command-kind entry echoing the prompt and the raw text
    fn echo_command_line(&mut self, raw: &str) {
        let line = StyledLine::from_spans(vec![
            Span::plain(self.prompt()),
            Span::plain(raw),
        ]);
        self.history
            .push(EntryKind::Command, StyledText::from_lines(vec![line]));
    }

    /// Route a normalized token to its formatter
    fn dispatch(&mut self, token: &str) {
        tracing::trace!(token, "Dispatching command");

        let ConfigState::Ready(cfg) = &self.config else {
            self.history
                .push(EntryKind::Output, StyledText::plain(format::NOT_READY));
            return;
        };

        match Command::parse(token) {
            Some(Command::Help) => {
                self.history.push(EntryKind::Output, format::help());
            }
            Some(Command::About) => {
                self.history
                    .push(EntryKind::Colored, format::about(&cfg.about, &self.style));
            }
            Some(Command::Experience) => {
                self.history.push(
                    EntryKind::Colored,
                    format::experience(&cfg.experience, &self.style),
                );
            }
            Some(Command::Projects) => {
                self.history.push(
                    EntryKind::Colored,
                    format::projects(&cfg.projects, &self.style),
                );
            }
            Some(Command::Skills) => {
                self.history
                    .push(EntryKind::Colored, format::skills(&cfg.skills, &self.style));
            }
            Some(Command::Contact) => {
                self.history.push(
                    EntryKind::Colored,
                    format::contact(&cfg.personal, &self.style),
                );
            }
            Some(Command::Clear) => {
                let banner = format::banner(&cfg.personal);
                self.history.clear();
                self.history.push(EntryKind::Banner, banner);
            }
            None => {
                tracing::debug!(token, "Unknown command");
                self.history.push(EntryKind::Output, format::unknown(token));
            }
        }
    }
}
