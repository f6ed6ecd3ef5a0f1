//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin surface over the
//! headless console:
//! - converts terminal key events to `InputEvent`s
//! - polls the one-time async config load each frame
//! - redraws the scrollback, input line, and status bar from console state
//!
//! All interaction semantics live in `termfolio-core`; nothing here decides
//! what a keystroke means beyond translating it.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::Terminal;
use tokio::sync::oneshot;
use unicode_width::UnicodeWidthStr;

use termfolio_core::{config, Config, ConfigError, Console, FormatStyle, InputEvent};

use crate::theme::{self, ColorMode};

/// Rows reserved below the scrollback: the input line and the status bar
const CHROME_HEIGHT: u16 = 2;

/// Mouse wheel scroll step, in lines
const WHEEL_STEP: usize = 3;

/// Startup options resolved from the CLI
#[derive(Clone, Debug)]
pub struct AppOptions {
    /// The portfolio config file to load
    pub config_path: PathBuf,
    /// Colored or plain rendering
    pub color_mode: ColorMode,
    /// Section banner layout
    pub format_style: FormatStyle,
}

/// One rendered scrollback line: spans with resolved styles
type RenderedLine = Vec<(String, Style)>;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The headless console holding all interaction state
    console: Console,
    /// Rendering strategy selected at startup
    color_mode: ColorMode,
    /// Where the config file was loaded from (for error reporting)
    config_path: PathBuf,
    /// Pending config load result; `None` once resolved
    config_rx: Option<oneshot::Receiver<Result<Config, ConfigError>>>,
    /// Scroll offset in lines from the bottom (0 = latest)
    scroll_offset: usize,
    /// Total scrollback lines at the last render (for scroll bounds)
    total_lines: usize,
    /// Terminal size
    size: (u16, u16),
}

impl App {
    /// Create the app and kick off the one-time config load
    ///
    /// # Errors
    ///
    /// Fails if the terminal size cannot be queried.
    pub fn new(options: AppOptions) -> anyhow::Result<Self> {
        let size = crossterm::terminal::size()?;

        // The one async operation of the session: spawn the load, deliver
        // the result over a oneshot, poll it non-blockingly each frame.
        let (tx, rx) = oneshot::channel();
        let load_path = options.config_path.clone();
        tracing::info!(path = %load_path.display(), "Starting portfolio config load");
        tokio::spawn(async move {
            let _ = tx.send(config::load_from_path(&load_path).await);
        });

        Ok(Self {
            running: true,
            console: Console::new(options.format_style),
            color_mode: options.color_mode,
            config_path: options.config_path,
            config_rx: Some(rx),
            scroll_offset: 0,
            total_lines: 0,
            size,
        })
    }

    /// Main event loop
    ///
    /// # Errors
    ///
    /// Propagates terminal draw failures.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let frame_duration = Duration::from_millis(33);
        let mut event_stream = EventStream::new();

        // Render immediately so the user sees the surface before the
        // config load resolves
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(&key);
                            }
                            Event::Mouse(mouse) => self.handle_mouse(&mouse),
                            Event::Resize(w, h) => self.size = (w, h),
                            _ => {}
                        }
                    }
                }

                _ = tokio::time::sleep(frame_duration) => {}
            }

            self.poll_config();
            self.render(terminal)?;
        }

        Ok(())
    }

    /// Resolve the config load if its result has arrived
    fn poll_config(&mut self) {
        let Some(rx) = &mut self.config_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.console.resolve_config(result);
                self.config_rx = None;
                self.scroll_offset = 0;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                // The load task died without reporting; surface it the same
                // way as any other load failure
                self.console.resolve_config(Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source: io::Error::other("config load task dropped"),
                }));
                self.config_rx = None;
            }
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: &event::KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            KeyCode::PageUp => {
                let page = (self.view_height() / 2).max(1) as usize;
                self.scroll_up(page);
            }
            KeyCode::PageDown => {
                let page = (self.view_height() / 2).max(1) as usize;
                self.scroll_offset = self.scroll_offset.saturating_sub(page);
            }

            _ => {
                if let Some(input) = map_key(key) {
                    self.console.handle_input(input);
                    if input == InputEvent::Submit {
                        // Autoscroll to the latest output
                        self.scroll_offset = 0;
                    }
                }
            }
        }
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: &event::MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(WHEEL_STEP);
            }
            _ => {}
        }
    }

    fn scroll_up(&mut self, lines: usize) {
        let max_scroll = self
            .total_lines
            .saturating_sub(self.view_height() as usize);
        self.scroll_offset = (self.scroll_offset + lines).min(max_scroll);
    }

    /// Scrollback rows available above the input line and status bar
    fn view_height(&self) -> u16 {
        self.size.1.saturating_sub(CHROME_HEIGHT)
    }

    /// Flatten the scrollback into styled lines
    fn scrollback_lines(&self) -> Vec<RenderedLine> {
        let mut lines = Vec::new();
        for entry in self.console.history().entries() {
            let base = theme::entry_base_style(entry.kind, self.color_mode);
            for line in &entry.content.lines {
                lines.push(
                    line.spans
                        .iter()
                        .map(|span| {
                            (
                                span.text.clone(),
                                theme::span_style(span, base, self.color_mode),
                            )
                        })
                        .collect(),
                );
            }
        }
        lines
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let lines = self.scrollback_lines();
        self.total_lines = lines.len();

        let view_height = self.view_height() as usize;
        let max_scroll = self.total_lines.saturating_sub(view_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let visible_end = self.total_lines - self.scroll_offset;
        let visible_start = visible_end.saturating_sub(view_height);

        let prompt = self.console.prompt();
        let buffer = self.console.buffer().to_string();
        let status = self.status_line();
        let color_mode = self.color_mode;

        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            let width = area.width;

            // Scrollback
            for (row, line) in lines[visible_start..visible_end].iter().enumerate() {
                let y = row as u16;
                if y >= area.height.saturating_sub(CHROME_HEIGHT) {
                    break;
                }
                let mut x = 0u16;
                for (text, style) in line {
                    if x >= width {
                        break;
                    }
                    buf.set_stringn(x, y, text, (width - x) as usize, *style);
                    x = x.saturating_add(text.width() as u16);
                }
            }

            // Input line: prompt, buffer, block cursor
            if area.height >= CHROME_HEIGHT {
                let input_y = area.height - CHROME_HEIGHT;
                let prompt_style = if color_mode == ColorMode::Colored {
                    Style::default().fg(theme::PROMPT)
                } else {
                    Style::default()
                };
                buf.set_stringn(0, input_y, &prompt, width as usize, prompt_style);
                let x = prompt.width() as u16;
                if x < width {
                    let line = format!("{buffer}_");
                    buf.set_stringn(x, input_y, &line, (width - x) as usize, Style::default());
                }

                // Status bar
                let status_y = area.height - 1;
                buf.set_stringn(
                    0,
                    status_y,
                    &status,
                    width as usize,
                    Style::default().fg(theme::STATUS),
                );
            }
        })?;

        Ok(())
    }

    /// The status bar text
    fn status_line(&self) -> String {
        let state = if self.config_rx.is_some() {
            "loading config..."
        } else if self.console.config_ready() {
            "ready"
        } else {
            "config load failed"
        };

        let scroll_info = if self.scroll_offset > 0 {
            format!(" [^{} lines - PgDn to scroll]", self.scroll_offset)
        } else {
            String::new()
        };

        format!(
            " {state} | Esc to quit | Tab complete | Up/Down history | PgUp/PgDn scroll{scroll_info}"
        )
    }
}

/// Translate a console-bound key event; app-level keys return `None`
fn map_key(key: &event::KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Tab => Some(InputEvent::Complete),
        KeyCode::Up => Some(InputEvent::HistoryPrev),
        KeyCode::Down => Some(InputEvent::HistoryNext),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Char(c))
        }
        _ => None,
    }
}
