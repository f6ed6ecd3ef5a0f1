//! Command Vocabulary
//!
//! The closed set of commands the console understands, token normalization,
//! and prefix completion. The name list order is fixed: it is the order
//! completion matches are displayed in.

use serde::{Deserialize, Serialize};

/// The fixed command name list, in completion display order
pub const COMMAND_NAMES: [&str; 7] = [
    "about",
    "experience",
    "projects",
    "skills",
    "help",
    "clear",
    "contact",
];

/// A recognized command token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Show the about section
    About,
    /// Show work experience
    Experience,
    /// Show projects
    Projects,
    /// Show technical skills
    Skills,
    /// Show the help text
    Help,
    /// Clear the terminal and re-show the banner
    Clear,
    /// Show contact details
    Contact,
}

impl Command {
    /// Parse a normalized token into a command
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "about" => Some(Self::About),
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "skills" => Some(Self::Skills),
            "help" => Some(Self::Help),
            "clear" => Some(Self::Clear),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// The command's canonical name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Contact => "contact",
        }
    }
}

/// Normalize raw input into a dispatch token: trimmed and lowercased
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Command names whose prefix matches the lowercased buffer
///
/// The buffer is lowercased but not trimmed, so a leading space defeats
/// matching. Results are in [`COMMAND_NAMES`] order.
#[must_use]
pub fn complete(buffer: &str) -> Vec<&'static str> {
    let needle = buffer.to_lowercase();
    COMMAND_NAMES
        .iter()
        .copied()
        .filter(|name| name.starts_with(&needle))
        .collect()
}
