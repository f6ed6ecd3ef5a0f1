//! Termfolio TUI - the ratatui surface for the portfolio terminal
//!
//! This crate is a thin rendering surface over `termfolio-core`: it owns
//! the terminal, translates crossterm events into core `InputEvent`s, and
//! redraws the scrollback and prompt from console state.
//!
//! # Architecture
//!
//! - **App**: async event loop (crossterm `EventStream` + frame tick),
//!   scroll state, and rendering
//! - **Theme**: the color palette and the colored/plain rendering strategy

pub mod app;
pub mod theme;

pub use app::{App, AppOptions};
pub use theme::ColorMode;
