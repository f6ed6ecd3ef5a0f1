//! Termfolio TUI Entry Point
//!
//! Launches the portfolio terminal.
//!
//! Usage:
//!   termfolio-tui [OPTIONS]
//!
//! Options:
//!   --config <PATH>     Portfolio config file (env: TERMFOLIO_CONFIG)
//!   --plain             Render without colors (also via non-empty NO_COLOR)
//!   --banner-width <N>  Section banner width (default: 60)
//!   --flat-titles       Left-align section titles instead of centering

use std::io;
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termfolio_core::{default_config_path, FormatStyle};
use termfolio_tui::{App, AppOptions, ColorMode};

#[derive(Parser, Debug)]
#[command(name = "termfolio-tui", version, about = "A scripted portfolio terminal")]
struct Args {
    /// Portfolio config file path
    #[arg(long, env = "TERMFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Render without colors
    #[arg(long)]
    plain: bool,

    /// Section banner width
    #[arg(long, default_value_t = 60)]
    banner_width: usize,

    /// Left-align section titles instead of centering them
    #[arg(long)]
    flat_titles: bool,
}

impl Args {
    /// The config file to load: the flag/env path, the XDG location when it
    /// exists, or `./config.yaml`
    fn resolve_config_path(&self) -> PathBuf {
        if let Some(path) = &self.config {
            return path.clone();
        }
        if let Some(path) = default_config_path() {
            if path.exists() {
                return path;
            }
        }
        PathBuf::from("config.yaml")
    }

    fn color_mode(&self) -> ColorMode {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if self.plain || no_color {
            ColorMode::Plain
        } else {
            ColorMode::Colored
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging goes to stderr and is off unless TERMFOLIO_LOG directs
    // otherwise; the alternate screen owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_env("TERMFOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    // Check for a TTY before touching the terminal
    use std::io::IsTerminal;
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: termfolio-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  - Running in a non-interactive environment (CI, container)");
        eprintln!("  - SSH without -t flag");
        eprintln!("  - Piped stdin/stdout");
        std::process::exit(1);
    }

    let options = AppOptions {
        config_path: args.resolve_config_path(),
        color_mode: args.color_mode(),
        format_style: FormatStyle {
            banner_width: args.banner_width,
            centered_titles: !args.flat_titles,
        },
    };

    // Restore the terminal before printing any panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, options).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    options: AppOptions,
) -> anyhow::Result<()> {
    let mut app = App::new(options)?;
    app.run(terminal).await
}
