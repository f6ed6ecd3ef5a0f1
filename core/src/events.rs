//! Input Events
//!
//! Events sent from UI surfaces to the [`Console`](crate::console::Console).
//! These represent the discrete keystrokes the interaction model reacts to.
//!
//! # Design Philosophy
//!
//! UI surfaces are "dumb" forwarders. They don't interpret what a key means -
//! they translate their native key events into `InputEvent`s and let the
//! console decide how the buffer, history, and recall state change.

use serde::{Deserialize, Serialize};

/// A key event forwarded from a UI surface to the console
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A printable character was typed
    Char(char),
    /// Delete the character before the cursor
    Backspace,
    /// Submit the current line (Enter)
    Submit,
    /// Recall the previous command (Up arrow)
    HistoryPrev,
    /// Recall the next command (Down arrow)
    HistoryNext,
    /// Attempt tab-completion of the current line
    Complete,
}
