//! Termfolio Core - Headless Interaction Model for the Portfolio Terminal
//!
//! This crate provides the command-line interaction model for termfolio,
//! completely independent of any UI framework. It can drive a TUI, a web
//! surface, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI Surfaces                         │
//! │  ┌─────────┐  ┌─────────┐  ┌───────────────────────────┐ │
//! │  │   TUI   │  │   Web   │  │        Headless           │ │
//! │  │(ratatui)│  │         │  │     (tests, scripts)      │ │
//! │  └────┬────┘  └────┬────┘  └─────────────┬─────────────┘ │
//! │       └────────────┴─────────────────────┘               │
//! │                       │                                   │
//! │                 InputEvent (up)                           │
//! │              HistoryEntry list (down)                     │
//! │                       │                                   │
//! └───────────────────────┼───────────────────────────────────┘
//!                         │
//! ┌───────────────────────┼───────────────────────────────────┐
//! │                 TERMFOLIO CORE                             │
//! │  ┌────────────────────┴─────────────────────────────────┐ │
//! │  │                    Console                            │ │
//! │  │  ┌─────────┐  ┌──────────┐  ┌─────────┐  ┌─────────┐ │ │
//! │  │  │ History │  │ Command  │  │ Recall  │  │ Config  │ │ │
//! │  │  │  Store  │  │ Dispatch │  │  State  │  │  State  │ │ │
//! │  │  └─────────┘  └──────────┘  └─────────┘  └─────────┘ │ │
//! │  └──────────────────────────────────────────────────────┘ │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Console`]: The main controller owning buffer, history, and dispatch
//! - [`InputEvent`]: Key events sent from UI surfaces to the console
//! - [`HistoryEntry`]: One scrollback entry (banner, output, command, colored)
//! - [`StyledText`]: Tagged content model produced by the formatters
//! - [`Config`]: The portfolio document driving all command output
//!
//! # Quick Start
//!
//! ```ignore
//! use termfolio_core::{Console, FormatStyle, InputEvent, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut console = Console::new(FormatStyle::default());
//!
//!     // Resolve the one-time config load
//!     let loaded = config::load_from_path("config.yaml".as_ref()).await;
//!     console.resolve_config(loaded);
//!
//!     // Feed key events from the surface
//!     for c in "help".chars() {
//!         console.handle_input(InputEvent::Char(c));
//!     }
//!     console.handle_input(InputEvent::Submit);
//!
//!     // Render the scrollback however the surface likes
//!     for entry in console.history().entries() {
//!         // draw entry.content ...
//!     }
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`events`]: Key events from UI surfaces to the console
//! - [`console`]: The input controller and command dispatch
//! - [`command`]: The fixed command vocabulary and prefix completion
//! - [`format`]: Formatters producing styled text blocks from the config
//! - [`text`]: Tagged content model and inline color markup parsing
//! - [`history`]: Append-only scrollback and submitted-command logs
//! - [`config`]: Portfolio document model, YAML loading, validation
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. Styling is a surface concern; the console only produces
//! tagged spans.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod config;
pub mod console;
pub mod events;
pub mod format;
pub mod history;
pub mod text;

pub use command::{Command, COMMAND_NAMES};
pub use config::{
    default_config_path, load_from_path, About, Config, ConfigError, Experience, Personal,
    Project, Skills,
};
pub use console::{ConfigState, Console, RecallState};
pub use events::InputEvent;
pub use format::FormatStyle;
pub use history::{CommandLog, EntryKind, HistoryEntry, HistoryStore};
pub use text::{ColorName, Span, StyledLine, StyledText};
