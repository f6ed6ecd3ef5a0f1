//! Scrollback and Command Logs
//!
//! Two append-only sequences owned by the console: the scrollback of
//! rendered entries, and the raw log of submitted command lines used for
//! Up/Down recall. Entries are immutable once appended; the scrollback is
//! truncated only by the `clear` command.

use serde::{Deserialize, Serialize};

use crate::text::StyledText;

/// The kind of a scrollback entry, a rendering hint for surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// The startup title block
    Banner,
    /// Plain command output
    Output,
    /// An echoed command line (prompt + what the user typed)
    Command,
    /// Command output carrying colored spans
    Colored,
}

/// One scrollback entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What kind of entry this is
    pub kind: EntryKind,
    /// The entry's content
    pub content: StyledText,
}

/// The append-only scrollback
#[derive(Clone, Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Create an empty scrollback
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, kind: EntryKind, content: StyledText) {
        self.entries.push(HistoryEntry { kind, content });
    }

    /// All entries, in append (display) order
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scrollback is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry; only the `clear` command does this
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "Cleared scrollback");
    }
}

/// The append-only log of submitted command lines
///
/// Raw text, untrimmed, in submission order. Never mutated or removed;
/// recall indexes into this log.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    entries: Vec<String>,
}

impl CommandLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted command line
    pub fn push(&mut self, raw: impl Into<String>) {
        self.entries.push(raw.into());
    }

    /// The entry at `index`, oldest first
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of submitted lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been submitted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry, if any
    #[must_use]
    pub fn newest_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }
}
